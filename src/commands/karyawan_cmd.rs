use crate::models::karyawan::{CreateKaryawanPayload, Karyawan, UpdateKaryawanPayload};
use crate::{api, AppState};

const ROLE_VALID: [&str; 3] = ["ADMIN", "KASIR", "DRIVER"];

/// Ambil semua karyawan (Admin only)
#[tauri::command]
pub async fn get_karyawan(state: tauri::State<'_, AppState>) -> Result<Vec<Karyawan>, String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    let mut karyawan = api::karyawan::list(&state.api, &sesi.token)
        .await
        .map_err(|e| api::sanitize_error(e, "get_karyawan"))?;

    karyawan.sort_by(|a, b| a.nama.cmp(&b.nama));
    Ok(karyawan)
}

/// Buat karyawan baru (Admin only)
#[tauri::command]
pub async fn create_karyawan(
    state: tauri::State<'_, AppState>,
    payload: CreateKaryawanPayload,
) -> Result<Karyawan, String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    crate::validation::validate_nama(&payload.nama)?;
    crate::validation::validate_email(&payload.email)?;

    if !ROLE_VALID.contains(&payload.role.as_str()) {
        return Err(format!("Role tidak dikenal: {}", payload.role));
    }
    if payload.password.len() < 8 {
        return Err("Password minimal 8 karakter".into());
    }

    let karyawan = api::karyawan::create(&state.api, &sesi.token, &payload)
        .await
        .map_err(|e| api::sanitize_error(e, "create_karyawan"))?;

    crate::log_info!("KARYAWAN", "Karyawan baru dibuat", serde_json::json!({
        "karyawan_id": karyawan.id,
        "role": karyawan.role,
        "oleh": sesi.claims.sub
    }));

    Ok(karyawan)
}

/// Update karyawan (Admin only)
#[tauri::command]
pub async fn update_karyawan(
    state: tauri::State<'_, AppState>,
    karyawan_id: i64,
    payload: UpdateKaryawanPayload,
) -> Result<Karyawan, String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    crate::validation::validate_nama(&payload.nama)?;
    crate::validation::validate_email(&payload.email)?;

    if !ROLE_VALID.contains(&payload.role.as_str()) {
        return Err(format!("Role tidak dikenal: {}", payload.role));
    }

    let karyawan = api::karyawan::update(&state.api, &sesi.token, karyawan_id, &payload)
        .await
        .map_err(|e| api::sanitize_error(e, "update_karyawan"))?;

    Ok(karyawan)
}

/// Aktif/nonaktifkan karyawan (Admin only)
#[tauri::command]
pub async fn toggle_status_karyawan(
    state: tauri::State<'_, AppState>,
    karyawan_id: i64,
    aktif: bool,
) -> Result<Karyawan, String> {
    let sesi = crate::auth::guard::validate_admin(&state)?;

    if sesi.claims.sub == karyawan_id && !aktif {
        return Err("Anda tidak dapat menonaktifkan akun sendiri".into());
    }

    let karyawan = api::karyawan::set_aktif(&state.api, &sesi.token, karyawan_id, aktif)
        .await
        .map_err(|e| api::sanitize_error(e, "toggle_status_karyawan"))?;

    crate::log_info!("KARYAWAN", "Status karyawan berubah", serde_json::json!({
        "karyawan_id": karyawan.id,
        "aktif": karyawan.aktif,
        "oleh": sesi.claims.sub
    }));

    Ok(karyawan)
}
