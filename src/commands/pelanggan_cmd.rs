use crate::feed::{mask_nama, mask_no_hp};
use crate::models::pelanggan::{
    CreatePelangganPayload, Pelanggan, PelangganTampilan, UpdatePelangganPayload,
};
use crate::{api, AppState};

/// Proyeksi privacy-aware: non-admin mendapat kontak yang dimask.
fn tampilkan(p: Pelanggan, admin: bool) -> PelangganTampilan {
    if admin {
        PelangganTampilan {
            id: p.id,
            nama: p.nama,
            email: p.email,
            no_hp: p.no_hp,
            alamat: p.alamat,
        }
    } else {
        PelangganTampilan {
            id: p.id,
            nama: mask_nama(&p.nama),
            email: None,
            no_hp: p.no_hp.as_deref().map(mask_no_hp),
            alamat: None,
        }
    }
}

/// Ambil daftar pelanggan, bisa dengan kata kunci pencarian.
#[tauri::command]
pub async fn get_pelanggan(
    state: tauri::State<'_, AppState>,
    search: Option<String>,
) -> Result<Vec<PelangganTampilan>, String> {
    let sesi = crate::auth::guard::validate_session(&state)?;
    let is_admin = sesi.claims.is_admin();

    let pelanggan = api::pelanggan::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_pelanggan"))?;

    let term = search.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty());

    let mut hasil: Vec<PelangganTampilan> = pelanggan
        .into_iter()
        .filter(|p| {
            term.as_deref().map_or(true, |t| {
                p.nama.to_lowercase().contains(t)
                    || p.email.as_deref().map_or(false, |e| e.to_lowercase().contains(t))
            })
        })
        .map(|p| tampilkan(p, is_admin))
        .collect();

    hasil.sort_by(|a, b| a.nama.cmp(&b.nama));
    Ok(hasil)
}

/// Daftarkan pelanggan baru (Admin & Kasir)
#[tauri::command]
pub async fn create_pelanggan(
    state: tauri::State<'_, AppState>,
    payload: CreatePelangganPayload,
) -> Result<PelangganTampilan, String> {
    let sesi = crate::auth::guard::require_role(&state, &["ADMIN", "KASIR"])?;

    crate::validation::validate_payload_pelanggan(
        &payload.nama,
        payload.email.as_deref(),
        payload.no_hp.as_deref(),
    )?;

    let pelanggan = api::pelanggan::create(&state.api, &sesi.token, &payload)
        .await
        .map_err(|e| api::sanitize_error(e, "create_pelanggan"))?;

    crate::log_info!("PELANGGAN", "Pelanggan baru didaftarkan", serde_json::json!({
        "pelanggan_id": pelanggan.id,
        "oleh": sesi.claims.sub
    }));

    Ok(tampilkan(pelanggan, sesi.claims.is_admin()))
}

/// Update data pelanggan (Admin & Kasir)
#[tauri::command]
pub async fn update_pelanggan(
    state: tauri::State<'_, AppState>,
    pelanggan_id: i64,
    payload: UpdatePelangganPayload,
) -> Result<PelangganTampilan, String> {
    let sesi = crate::auth::guard::require_role(&state, &["ADMIN", "KASIR"])?;

    crate::validation::validate_payload_pelanggan(
        &payload.nama,
        payload.email.as_deref(),
        payload.no_hp.as_deref(),
    )?;

    let pelanggan = api::pelanggan::update(&state.api, &sesi.token, pelanggan_id, &payload)
        .await
        .map_err(|e| api::sanitize_error(e, "update_pelanggan"))?;

    Ok(tampilkan(pelanggan, sesi.claims.is_admin()))
}

/// Hapus pelanggan (Admin only)
#[tauri::command]
pub async fn delete_pelanggan(
    state: tauri::State<'_, AppState>,
    pelanggan_id: i64,
) -> Result<(), String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    api::pelanggan::delete(&state.api, &sesi.token, pelanggan_id)
        .await
        .map_err(|e| api::sanitize_error(e, "delete_pelanggan"))?;

    crate::log_info!("PELANGGAN", "Pelanggan dihapus", serde_json::json!({
        "pelanggan_id": pelanggan_id,
        "oleh": sesi.claims.sub
    }));

    Ok(())
}
