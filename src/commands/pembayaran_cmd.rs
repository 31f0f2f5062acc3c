use crate::models::pembayaran::{CreatePembayaranPayload, Pembayaran, StatusPembayaran};
use crate::rate_limiter;
use crate::{api, AppState};

const METODE_VALID: [&str; 3] = ["TUNAI", "TRANSFER", "QRIS"];

/// Ambil daftar pembayaran, filter status/transaksi opsional (Admin & Kasir)
#[tauri::command]
pub async fn get_pembayaran(
    state: tauri::State<'_, AppState>,
    status: Option<String>,
    transaksi_id: Option<String>,
) -> Result<Vec<Pembayaran>, String> {
    let sesi = crate::auth::guard::require_role(&state, &["ADMIN", "KASIR"])?;

    let pembayaran = api::pembayaran::list(
        &state.api,
        &sesi.token,
        status.as_deref(),
        transaksi_id.as_deref(),
    )
    .await
    .map_err(|e| api::sanitize_error(e, "get_pembayaran"))?;

    Ok(pembayaran)
}

/// Catat pembayaran untuk sebuah transaksi (Admin & Kasir)
#[tauri::command]
pub async fn create_pembayaran(
    state: tauri::State<'_, AppState>,
    payload: CreatePembayaranPayload,
) -> Result<Pembayaran, String> {
    let sesi = crate::auth::guard::require_role(&state, &["ADMIN", "KASIR"])?;

    if !METODE_VALID.contains(&payload.metode.as_str()) {
        return Err(format!("Metode pembayaran tidak dikenal: {}", payload.metode));
    }
    crate::validation::validate_harga(payload.total_bayar, Some(1.0), None)?;

    let pembayaran = api::pembayaran::create(&state.api, &sesi.token, &payload)
        .await
        .map_err(|e| api::sanitize_error(e, "create_pembayaran"))?;

    crate::log_info!("PEMBAYARAN", "Pembayaran dicatat", serde_json::json!({
        "pembayaran_id": pembayaran.id,
        "transaksi_id": pembayaran.transaksi_id,
        "metode": pembayaran.metode,
        "oleh": sesi.claims.sub
    }));

    Ok(pembayaran)
}

/// Cek status terkini satu pembayaran. Dipoll UI selama menunggu
/// settlement, jadi dibatasi rate limiter.
#[tauri::command]
pub async fn check_status_pembayaran(
    state: tauri::State<'_, AppState>,
    pembayaran_id: i64,
) -> Result<StatusPembayaran, String> {
    let sesi = crate::auth::guard::require_role(&state, &["ADMIN", "KASIR"])?;

    rate_limiter::STATUS_PEMBAYARAN_LIMIT.check(sesi.claims.sub, "check_status")?;

    let pembayaran = api::pembayaran::detail(&state.api, &sesi.token, pembayaran_id)
        .await
        .map_err(|e| api::sanitize_error(e, "check_status_pembayaran"))?;

    Ok(StatusPembayaran {
        id: pembayaran.id,
        status: pembayaran.status,
        tanggal: pembayaran.tanggal,
    })
}
