use crate::models::stok::{BarisRiwayatStok, CreateStokMutasiPayload, SaldoStok, StokMutasi};
use crate::{api, ledger, AppState};

/// Ambil saldo stok hasil rekonsiliasi produk vs ledger mutasi.
/// Non-admin tidak menerima harga beli/nilai stok dan hanya produk aktif.
#[tauri::command]
pub async fn get_saldo_stok(
    state: tauri::State<'_, AppState>,
    tampilkan_nonaktif: Option<bool>,
) -> Result<Vec<SaldoStok>, String> {
    let sesi = crate::auth::guard::validate_session(&state)?;
    let is_admin = sesi.claims.is_admin();

    let mut produk = api::produk::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_saldo_stok"))?;
    let kategori = api::kategori::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_saldo_stok"))?;
    let mutasi = api::stok::mutasi(&state.api, &sesi.token, None)
        .await
        .map_err(|e| api::sanitize_error(e, "get_saldo_stok"))?;

    let aktif_saja = if is_admin {
        !tampilkan_nonaktif.unwrap_or(false)
    } else {
        true
    };
    if aktif_saja {
        produk.retain(|p| p.aktif);
    }

    let ambang = crate::config::get_config().dashboard.ambang_stok_menipis;

    Ok(ledger::rekonsiliasi(&produk, &kategori, &mutasi, is_admin, ambang))
}

/// Ambil riwayat mutasi dengan saldo berjalan, terbaru dulu.
#[tauri::command]
pub async fn get_riwayat_stok(
    state: tauri::State<'_, AppState>,
    produk_id: Option<i64>,
) -> Result<Vec<BarisRiwayatStok>, String> {
    let sesi = crate::auth::guard::validate_session(&state)?;

    let mutasi = api::stok::mutasi(&state.api, &sesi.token, produk_id)
        .await
        .map_err(|e| api::sanitize_error(e, "get_riwayat_stok"))?;
    let produk = api::produk::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_riwayat_stok"))?;

    Ok(ledger::riwayat_berjalan(&produk, &mutasi))
}

/// Catat mutasi stok manual (Admin only)
#[tauri::command]
pub async fn create_stok_mutasi(
    state: tauri::State<'_, AppState>,
    payload: CreateStokMutasiPayload,
) -> Result<StokMutasi, String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    ledger::validasi_mutasi(&payload)?;

    let mutasi = api::stok::create(&state.api, &sesi.token, &payload)
        .await
        .map_err(|e| api::sanitize_error(e, "create_stok_mutasi"))?;

    crate::log_info!("STOK", "Mutasi stok dicatat", serde_json::json!({
        "mutasi_id": mutasi.id,
        "produk_id": mutasi.produk_id,
        "jenis": mutasi.jenis,
        "jumlah": mutasi.jumlah,
        "oleh": sesi.claims.sub
    }));

    Ok(mutasi)
}
