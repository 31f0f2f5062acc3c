pub mod guard;
pub mod token;

use serde_json::json;
use tauri::Emitter;

use token::Claims;

/// Nama event yang dipancarkan setiap token berubah.
pub const EVENT_AUTH_CHANGED: &str = "auth:changed";

/// Siarkan perubahan sesi ke semua halaman yang terbuka.
/// Halaman memakai event ini untuk mengevaluasi ulang gerbang role-nya.
pub fn broadcast_perubahan(app: &tauri::AppHandle, claims: Option<&Claims>) {
    let payload = match claims {
        Some(c) => json!({
            "logged_in": true,
            "karyawan_id": c.sub,
            "nama": c.nama,
            "role": c.role,
        }),
        None => json!({ "logged_in": false }),
    };

    if let Err(e) = app.emit(EVENT_AUTH_CHANGED, payload) {
        crate::log_warn!("AUTH", &format!("Gagal memancarkan event auth: {}", e));
    }
}
