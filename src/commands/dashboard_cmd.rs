use chrono::{Local, NaiveDate};

use crate::feed::{self, SumberFeed};
use crate::models::aktivitas::PaginatedAktivitas;
use crate::models::laporan::{ProdukTerlaris, StatistikDashboard, TitikGrafik};
use crate::rate_limiter;
use crate::{api, laporan, AppState};

/// Banyak baris transaksi yang ditarik sekali jalan untuk agregasi
/// laporan/feed. Cukup untuk toko; di atas ini laporan digeser ke backend.
const BATAS_TARIK_TRANSAKSI: i64 = 500;

fn validate_tanggal(s: &str) -> Result<(), String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| format!("Format tanggal tidak valid: {} (harus YYYY-MM-DD)", s))
}

/// Angka ringkas di atas dashboard.
#[tauri::command]
pub async fn get_statistik_dashboard(
    state: tauri::State<'_, AppState>,
) -> Result<StatistikDashboard, String> {
    let sesi = crate::auth::guard::validate_session(&state)?;

    rate_limiter::DASHBOARD_LIMIT.check(sesi.claims.sub, "statistik")?;

    let hari_ini = Local::now().format("%Y-%m-%d").to_string();

    let pembayaran = api::pembayaran::list(&state.api, &sesi.token, None, None)
        .await
        .map_err(|e| api::sanitize_error(e, "get_statistik_dashboard"))?;
    let produk = api::produk::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_statistik_dashboard"))?;
    let pengiriman = api::pengiriman::list(&state.api, &sesi.token, None)
        .await
        .map_err(|e| api::sanitize_error(e, "get_statistik_dashboard"))?;
    let pelanggan = api::pelanggan::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_statistik_dashboard"))?;

    // Total transaksi hari ini cukup dari metadata pagination.
    let transaksi = api::transaksi::list(&state.api, &sesi.token, 1, 1, Some(&hari_ini), None)
        .await
        .map_err(|e| api::sanitize_error(e, "get_statistik_dashboard"))?;

    let ambang = crate::config::get_config().dashboard.ambang_stok_menipis;

    Ok(laporan::statistik_dashboard(
        &hari_ini,
        &pembayaran,
        transaksi.total,
        pelanggan.len() as i64,
        &produk,
        &pengiriman,
        ambang,
    ))
}

/// Activity feed gabungan, privacy-aware, terbaru dulu.
#[tauri::command]
pub async fn get_activity_feed(
    state: tauri::State<'_, AppState>,
    page: Option<i64>,
) -> Result<PaginatedAktivitas, String> {
    let sesi = crate::auth::guard::validate_session(&state)?;
    let is_admin = sesi.claims.is_admin();

    rate_limiter::FEED_LIMIT.check(sesi.claims.sub, "feed")?;

    let pembayaran = api::pembayaran::list(&state.api, &sesi.token, None, None)
        .await
        .map_err(|e| api::sanitize_error(e, "get_activity_feed"))?;
    let transaksi = api::transaksi::list(
        &state.api,
        &sesi.token,
        1,
        BATAS_TARIK_TRANSAKSI,
        None,
        None,
    )
    .await
    .map_err(|e| api::sanitize_error(e, "get_activity_feed"))?;
    let pengiriman = api::pengiriman::list(&state.api, &sesi.token, None)
        .await
        .map_err(|e| api::sanitize_error(e, "get_activity_feed"))?;
    let pelanggan = api::pelanggan::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_activity_feed"))?;
    let produk = api::produk::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_activity_feed"))?;

    let config = crate::config::get_config();

    let entri = feed::susun_feed(
        &SumberFeed {
            pembayaran: &pembayaran,
            transaksi: &transaksi.data,
            pengiriman: &pengiriman,
            pelanggan: &pelanggan,
            produk: &produk,
        },
        is_admin,
        config.dashboard.ambang_stok_menipis,
    );

    Ok(feed::paginate(
        entri,
        page.unwrap_or(1),
        config.dashboard.feed_per_page,
    ))
}

/// Grafik pendapatan harian pada rentang tanggal (Admin only)
#[tauri::command]
pub async fn get_grafik_penjualan(
    state: tauri::State<'_, AppState>,
    mulai: String,
    sampai: String,
) -> Result<Vec<TitikGrafik>, String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    validate_tanggal(&mulai)?;
    validate_tanggal(&sampai)?;

    let pembayaran = api::pembayaran::list(&state.api, &sesi.token, None, None)
        .await
        .map_err(|e| api::sanitize_error(e, "get_grafik_penjualan"))?;

    Ok(laporan::grafik_penjualan(&pembayaran, &mulai, &sampai))
}

/// Produk terlaris pada rentang tanggal (Admin only)
#[tauri::command]
pub async fn get_produk_terlaris(
    state: tauri::State<'_, AppState>,
    mulai: String,
    sampai: String,
    limit: Option<i64>,
) -> Result<Vec<ProdukTerlaris>, String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    validate_tanggal(&mulai)?;
    validate_tanggal(&sampai)?;

    let transaksi = api::transaksi::list(
        &state.api,
        &sesi.token,
        1,
        BATAS_TARIK_TRANSAKSI,
        None,
        None,
    )
    .await
    .map_err(|e| api::sanitize_error(e, "get_produk_terlaris"))?;
    let produk = api::produk::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_produk_terlaris"))?;

    let dalam_rentang: Vec<_> = transaksi
        .data
        .into_iter()
        .filter(|t| {
            laporan::tanggal_saja(&t.created_at)
                .map_or(false, |d| d >= mulai.as_str() && d <= sampai.as_str())
        })
        .collect();

    Ok(laporan::produk_terlaris(
        &dalam_rentang,
        &produk,
        limit.unwrap_or(10).max(1) as usize,
    ))
}

/// Ekspor laporan penjualan ke file CSV. Path tujuan dipilih user lewat
/// dialog di frontend. (Admin only)
#[tauri::command]
pub async fn ekspor_laporan_csv(
    state: tauri::State<'_, AppState>,
    mulai: String,
    sampai: String,
    file_path: String,
) -> Result<String, String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    rate_limiter::EKSPOR_LIMIT.check(sesi.claims.sub, "ekspor")?;

    validate_tanggal(&mulai)?;
    validate_tanggal(&sampai)?;

    if file_path.trim().is_empty() || file_path.contains("..") || file_path.contains('\0') {
        return Err("Path file tidak valid".into());
    }

    let pembayaran = api::pembayaran::list(&state.api, &sesi.token, None, None)
        .await
        .map_err(|e| api::sanitize_error(e, "ekspor_laporan_csv"))?;

    let titik = laporan::grafik_penjualan(&pembayaran, &mulai, &sampai);
    let csv = laporan::render_csv(&titik);

    std::fs::write(&file_path, csv).map_err(|e| format!("Gagal menulis file: {}", e))?;

    crate::log_info!("LAPORAN", "Laporan diekspor", serde_json::json!({
        "mulai": mulai,
        "sampai": sampai,
        "baris": titik.len(),
        "oleh": sesi.claims.sub
    }));

    Ok(file_path)
}
