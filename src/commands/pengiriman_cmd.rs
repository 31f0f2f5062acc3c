use std::collections::HashMap;

use crate::models::pengiriman::{CreatePengirimanPayload, Pengiriman, PengirimanTampilan};
use crate::{api, AppState};

const JENIS_VALID: [&str; 2] = ["KURIR", "AMBIL_SENDIRI"];
const STATUS_VALID: [&str; 4] = ["DISIAPKAN", "DIKIRIM", "TIBA", "GAGAL"];

fn tampilkan(
    k: Pengiriman,
    karyawan: &HashMap<i64, String>,
    sesi: &crate::auth::token::SesiAktif,
) -> PengirimanTampilan {
    let driver_nama = k
        .driver_id
        .and_then(|id| {
            karyawan
                .get(&id)
                .cloned()
                .or_else(|| (id == sesi.claims.sub).then(|| sesi.claims.nama.clone()))
        });

    PengirimanTampilan {
        id: k.id,
        transaksi_id: k.transaksi_id,
        driver_id: k.driver_id,
        driver_nama,
        jenis: k.jenis,
        status: k.status,
        created_at: k.created_at,
        updated_at: k.updated_at,
    }
}

/// Ambil daftar pengiriman. Driver hanya melihat tugasnya sendiri.
#[tauri::command]
pub async fn get_pengiriman(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<PengirimanTampilan>, String> {
    let sesi = crate::auth::guard::validate_session(&state)?;

    let driver_id = (sesi.claims.role == "DRIVER").then_some(sesi.claims.sub);

    let pengiriman = api::pengiriman::list(&state.api, &sesi.token, driver_id)
        .await
        .map_err(|e| api::sanitize_error(e, "get_pengiriman"))?;

    let karyawan: HashMap<i64, String> = if sesi.claims.is_admin() {
        api::karyawan::list(&state.api, &sesi.token)
            .await
            .map(|d| d.into_iter().map(|k| (k.id, k.nama)).collect())
            .unwrap_or_default()
    } else {
        HashMap::new()
    };

    Ok(pengiriman
        .into_iter()
        .map(|k| tampilkan(k, &karyawan, &sesi))
        .collect())
}

/// Jadwalkan pengiriman untuk transaksi (Admin only)
#[tauri::command]
pub async fn create_pengiriman(
    state: tauri::State<'_, AppState>,
    payload: CreatePengirimanPayload,
) -> Result<Pengiriman, String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    if !JENIS_VALID.contains(&payload.jenis.as_str()) {
        return Err(format!("Jenis pengiriman tidak dikenal: {}", payload.jenis));
    }

    if payload.jenis == "KURIR" && payload.driver_id.is_none() {
        return Err("Pengiriman kurir harus punya driver".into());
    }

    let pengiriman = api::pengiriman::create(&state.api, &sesi.token, &payload)
        .await
        .map_err(|e| api::sanitize_error(e, "create_pengiriman"))?;

    crate::log_info!("PENGIRIMAN", "Pengiriman dijadwalkan", serde_json::json!({
        "pengiriman_id": pengiriman.id,
        "transaksi_id": pengiriman.transaksi_id,
        "oleh": sesi.claims.sub
    }));

    Ok(pengiriman)
}

/// Ubah status pengiriman. Admin boleh semua, Driver hanya tugasnya
/// sendiri; kepemilikan diverifikasi ulang oleh backend.
#[tauri::command]
pub async fn update_status_pengiriman(
    state: tauri::State<'_, AppState>,
    pengiriman_id: i64,
    status: String,
) -> Result<Pengiriman, String> {
    let sesi = crate::auth::guard::require_role(&state, &["ADMIN", "DRIVER"])?;

    if !STATUS_VALID.contains(&status.as_str()) {
        return Err(format!("Status tidak dikenal: {}", status));
    }

    let pengiriman =
        api::pengiriman::update_status(&state.api, &sesi.token, pengiriman_id, &status)
            .await
            .map_err(|e| api::sanitize_error(e, "update_status_pengiriman"))?;

    crate::log_info!("PENGIRIMAN", "Status pengiriman berubah", serde_json::json!({
        "pengiriman_id": pengiriman.id,
        "status": pengiriman.status,
        "oleh": sesi.claims.sub
    }));

    Ok(pengiriman)
}
