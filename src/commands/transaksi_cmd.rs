use std::collections::HashMap;

use crate::feed::mask_nama;
use crate::models::transaksi::{
    CreateTransaksiPayload, PaginatedTransaksi, Transaksi, TransaksiDetail,
    TransaksiItemTampilan, TransaksiTampilan,
};
use crate::{api, AppState};

const STATUS_VALID: [&str; 4] = ["BARU", "DIPROSES", "SELESAI", "BATAL"];

fn tampilkan(
    t: &Transaksi,
    pelanggan: &HashMap<i64, String>,
    karyawan: &HashMap<i64, String>,
    sesi: &crate::auth::token::SesiAktif,
) -> TransaksiTampilan {
    let admin = sesi.claims.is_admin();

    let pelanggan_nama = t.pelanggan_id.and_then(|id| pelanggan.get(&id)).map(|n| {
        if admin {
            n.clone()
        } else {
            mask_nama(n)
        }
    });

    // Nama kasir dari daftar karyawan (admin) atau sesi sendiri.
    let kasir_nama = karyawan
        .get(&t.kasir_id)
        .cloned()
        .or_else(|| (t.kasir_id == sesi.claims.sub).then(|| sesi.claims.nama.clone()));

    TransaksiTampilan {
        id: t.id.clone(),
        pelanggan_id: t.pelanggan_id,
        pelanggan_nama,
        kasir_id: t.kasir_id,
        kasir_nama,
        status: t.status.clone(),
        total_harga: t.total_harga,
        jumlah_item: t.items.len() as i64,
        created_at: t.created_at.clone(),
    }
}

/// Peta id -> nama karyawan. Hanya admin yang boleh menarik daftar
/// karyawan dari backend; role lain memakai peta kosong.
async fn peta_karyawan(
    state: &AppState,
    sesi: &crate::auth::token::SesiAktif,
) -> HashMap<i64, String> {
    if !sesi.claims.is_admin() {
        return HashMap::new();
    }

    match api::karyawan::list(&state.api, &sesi.token).await {
        Ok(daftar) => daftar.into_iter().map(|k| (k.id, k.nama)).collect(),
        Err(e) => {
            crate::log_warn!("TRANSAKSI", &format!("Gagal memuat karyawan: {}", e));
            HashMap::new()
        }
    }
}

/// Ambil daftar transaksi (Admin semua, role lain hanya miliknya sendiri)
#[tauri::command]
pub async fn get_transaksi(
    state: tauri::State<'_, AppState>,
    tanggal: Option<String>,
    page: i64,
) -> Result<PaginatedTransaksi, String> {
    let sesi = crate::auth::guard::validate_session(&state)?;
    let is_admin = sesi.claims.is_admin();

    let kasir_id = (!is_admin).then_some(sesi.claims.sub);
    let per_page = crate::config::get_config().api.per_page;

    let halaman = api::transaksi::list(
        &state.api,
        &sesi.token,
        page.max(1),
        per_page,
        tanggal.as_deref(),
        kasir_id,
    )
    .await
    .map_err(|e| api::sanitize_error(e, "get_transaksi"))?;

    let pelanggan: HashMap<i64, String> = api::pelanggan::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_transaksi"))?
        .into_iter()
        .map(|p| (p.id, p.nama))
        .collect();

    let karyawan = peta_karyawan(&state, &sesi).await;

    Ok(PaginatedTransaksi {
        data: halaman
            .data
            .iter()
            .map(|t| tampilkan(t, &pelanggan, &karyawan, &sesi))
            .collect(),
        total: halaman.total,
        page: halaman.page,
        per_page: halaman.per_page,
    })
}

/// Ambil detail satu transaksi beserta item bernama produk.
#[tauri::command]
pub async fn get_transaksi_detail(
    state: tauri::State<'_, AppState>,
    transaksi_id: String,
) -> Result<TransaksiDetail, String> {
    let sesi = crate::auth::guard::validate_session(&state)?;

    let transaksi = api::transaksi::detail(&state.api, &sesi.token, &transaksi_id)
        .await
        .map_err(|e| api::sanitize_error(e, "get_transaksi_detail"))?;

    if !sesi.claims.is_admin() && transaksi.kasir_id != sesi.claims.sub {
        return Err("Akses ditolak: transaksi milik kasir lain".into());
    }

    let produk: HashMap<i64, String> = api::produk::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_transaksi_detail"))?
        .into_iter()
        .map(|p| (p.id, p.nama))
        .collect();

    let pelanggan: HashMap<i64, String> = api::pelanggan::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_transaksi_detail"))?
        .into_iter()
        .map(|p| (p.id, p.nama))
        .collect();

    let karyawan = peta_karyawan(&state, &sesi).await;

    let items = transaksi
        .items
        .iter()
        .map(|i| TransaksiItemTampilan {
            produk_id: i.produk_id,
            produk_nama: produk
                .get(&i.produk_id)
                .cloned()
                .unwrap_or_else(|| format!("produk #{}", i.produk_id)),
            jumlah: i.jumlah,
            harga_satuan: i.harga_satuan,
            subtotal: i.subtotal,
        })
        .collect();

    Ok(TransaksiDetail {
        transaksi: tampilkan(&transaksi, &pelanggan, &karyawan, &sesi),
        items,
    })
}

/// Buat transaksi baru (Admin & Kasir)
#[tauri::command]
pub async fn create_transaksi(
    state: tauri::State<'_, AppState>,
    payload: CreateTransaksiPayload,
) -> Result<Transaksi, String> {
    let sesi = crate::auth::guard::require_role(&state, &["ADMIN", "KASIR"])?;

    if payload.items.is_empty() {
        return Err("Keranjang kosong".into());
    }

    for item in &payload.items {
        crate::validation::validate_jumlah(item.jumlah, Some(1), None)?;
    }

    let transaksi = api::transaksi::create(&state.api, &sesi.token, &payload)
        .await
        .map_err(|e| api::sanitize_error(e, "create_transaksi"))?;

    crate::log_info!("TRANSAKSI", "Transaksi baru", serde_json::json!({
        "transaksi_id": transaksi.id,
        "total": transaksi.total_harga,
        "oleh": sesi.claims.sub
    }));

    Ok(transaksi)
}

/// Ubah status transaksi. Pembatalan hanya untuk Admin.
#[tauri::command]
pub async fn update_status_transaksi(
    state: tauri::State<'_, AppState>,
    transaksi_id: String,
    status: String,
) -> Result<Transaksi, String> {
    if !STATUS_VALID.contains(&status.as_str()) {
        return Err(format!("Status tidak dikenal: {}", status));
    }

    let sesi = if status == "BATAL" {
        crate::auth::guard::validate_admin(&state)?
    } else {
        crate::auth::guard::require_role(&state, &["ADMIN", "KASIR"])?
    };

    let transaksi = api::transaksi::update_status(&state.api, &sesi.token, &transaksi_id, &status)
        .await
        .map_err(|e| api::sanitize_error(e, "update_status_transaksi"))?;

    crate::log_info!("TRANSAKSI", "Status transaksi berubah", serde_json::json!({
        "transaksi_id": transaksi.id,
        "status": transaksi.status,
        "oleh": sesi.claims.sub
    }));

    Ok(transaksi)
}
