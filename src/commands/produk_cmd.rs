use std::collections::HashMap;

use crate::models::produk::{
    CreateProdukPayload, Kategori, KategoriDenganJumlah, Produk, ProdukTampilan,
    UpdateProdukPayload,
};
use crate::{api, AppState};

/// Proyeksikan produk ke bentuk tabel. Harga beli hanya untuk admin.
fn tampilkan(p: Produk, kategori: &HashMap<i64, String>, admin: bool) -> ProdukTampilan {
    ProdukTampilan {
        id: p.id,
        kategori_nama: p.kategori_id.and_then(|id| kategori.get(&id).cloned()),
        kategori_id: p.kategori_id,
        sku: p.sku,
        nama: p.nama,
        harga_jual: p.harga_jual,
        harga_beli: admin.then_some(p.harga_beli),
        stok: p.stok,
        aktif: p.aktif,
    }
}

/// Ambil daftar produk. Bisa difilter search dan kategori.
#[tauri::command]
pub async fn get_produk(
    state: tauri::State<'_, AppState>,
    search: Option<String>,
    kategori_id: Option<i64>,
    tampilkan_nonaktif: Option<bool>,
) -> Result<Vec<ProdukTampilan>, String> {
    let sesi = crate::auth::guard::validate_session(&state)?;
    let is_admin = sesi.claims.is_admin();

    // Default: non-admin hanya melihat produk aktif. Admin bisa semua.
    let aktif_saja = if is_admin {
        !tampilkan_nonaktif.unwrap_or(false)
    } else {
        true
    };

    let produk = api::produk::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_produk"))?;
    let kategori = api::kategori::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_produk"))?;

    let nama_kategori: HashMap<i64, String> =
        kategori.into_iter().map(|k| (k.id, k.nama)).collect();

    let term = search.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty());

    let mut hasil: Vec<ProdukTampilan> = produk
        .into_iter()
        .filter(|p| !aktif_saja || p.aktif)
        .filter(|p| kategori_id.map_or(true, |id| p.kategori_id == Some(id)))
        .filter(|p| {
            term.as_deref().map_or(true, |t| {
                p.nama.to_lowercase().contains(t)
                    || p.sku.as_deref().map_or(false, |s| s.to_lowercase().contains(t))
            })
        })
        .map(|p| tampilkan(p, &nama_kategori, is_admin))
        .collect();

    hasil.sort_by(|a, b| a.nama.cmp(&b.nama));
    Ok(hasil)
}

/// Ambil satu produk untuk halaman detail/edit.
#[tauri::command]
pub async fn get_produk_detail(
    state: tauri::State<'_, AppState>,
    produk_id: i64,
) -> Result<ProdukTampilan, String> {
    let sesi = crate::auth::guard::validate_session(&state)?;

    let produk = api::produk::detail(&state.api, &sesi.token, produk_id)
        .await
        .map_err(|e| api::sanitize_error(e, "get_produk_detail"))?;
    let kategori = api::kategori::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_produk_detail"))?;

    let nama_kategori: HashMap<i64, String> =
        kategori.into_iter().map(|k| (k.id, k.nama)).collect();

    Ok(tampilkan(produk, &nama_kategori, sesi.claims.is_admin()))
}

/// Buat produk baru (Admin only)
#[tauri::command]
pub async fn create_produk(
    state: tauri::State<'_, AppState>,
    payload: CreateProdukPayload,
) -> Result<ProdukTampilan, String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    crate::validation::validate_payload_produk(
        &payload.nama,
        payload.sku.as_deref(),
        payload.harga_jual,
        payload.harga_beli,
    )?;
    crate::validation::validate_jumlah(payload.stok, None, None)?;

    let produk = api::produk::create(&state.api, &sesi.token, &payload)
        .await
        .map_err(|e| api::sanitize_error(e, "create_produk"))?;

    crate::log_info!("PRODUK", "Produk baru dibuat", serde_json::json!({
        "produk_id": produk.id,
        "nama": produk.nama,
        "oleh": sesi.claims.sub
    }));

    Ok(tampilkan(produk, &HashMap::new(), true))
}

/// Update produk (Admin only)
#[tauri::command]
pub async fn update_produk(
    state: tauri::State<'_, AppState>,
    produk_id: i64,
    payload: UpdateProdukPayload,
) -> Result<ProdukTampilan, String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    crate::validation::validate_payload_produk(
        &payload.nama,
        payload.sku.as_deref(),
        payload.harga_jual,
        payload.harga_beli,
    )?;

    let produk = api::produk::update(&state.api, &sesi.token, produk_id, &payload)
        .await
        .map_err(|e| api::sanitize_error(e, "update_produk"))?;

    crate::log_info!("PRODUK", "Produk diperbarui", serde_json::json!({
        "produk_id": produk.id,
        "oleh": sesi.claims.sub
    }));

    Ok(tampilkan(produk, &HashMap::new(), true))
}

/// Hapus (soft delete) produk (Admin only)
#[tauri::command]
pub async fn delete_produk(
    state: tauri::State<'_, AppState>,
    produk_id: i64,
) -> Result<(), String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    api::produk::delete(&state.api, &sesi.token, produk_id)
        .await
        .map_err(|e| api::sanitize_error(e, "delete_produk"))?;

    crate::log_info!("PRODUK", "Produk dinonaktifkan", serde_json::json!({
        "produk_id": produk_id,
        "oleh": sesi.claims.sub
    }));

    Ok(())
}

/// Ambil daftar kategori + jumlah produk per kategori.
#[tauri::command]
pub async fn get_kategori(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<KategoriDenganJumlah>, String> {
    let sesi = crate::auth::guard::validate_session(&state)?;

    let kategori = api::kategori::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_kategori"))?;
    let produk = api::produk::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_kategori"))?;

    let mut jumlah: HashMap<i64, i64> = HashMap::new();
    for p in &produk {
        if let Some(id) = p.kategori_id {
            *jumlah.entry(id).or_insert(0) += 1;
        }
    }

    let mut hasil: Vec<KategoriDenganJumlah> = kategori
        .into_iter()
        .map(|k| KategoriDenganJumlah {
            jumlah_produk: jumlah.get(&k.id).copied().unwrap_or(0),
            id: k.id,
            nama: k.nama,
        })
        .collect();

    hasil.sort_by(|a, b| a.nama.cmp(&b.nama));
    Ok(hasil)
}

/// Tambah kategori baru (Admin only)
#[tauri::command]
pub async fn create_kategori(
    state: tauri::State<'_, AppState>,
    nama: String,
) -> Result<Kategori, String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    let trimmed = nama.trim();
    if trimmed.is_empty() {
        return Err("Nama kategori tidak boleh kosong".into());
    }

    let kategori = api::kategori::create(&state.api, &sesi.token, trimmed)
        .await
        .map_err(|e| api::sanitize_error(e, "create_kategori"))?;

    Ok(kategori)
}
