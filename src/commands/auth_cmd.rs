use crate::models::karyawan::{AuthUserData, LoginResult};
use crate::{api, auth, AppState};

/// Login ke backend, simpan token, dan siarkan perubahan sesi.
#[tauri::command]
pub async fn login(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
    email: String,
    password: String,
) -> Result<LoginResult, String> {
    crate::validation::validate_email(&email)?;
    if password.is_empty() {
        return Err("Password tidak boleh kosong".into());
    }

    let resp = api::auth::login(&state.api, &email, &password)
        .await
        .map_err(|e| api::sanitize_error(e, "login"))?;

    let claims = state
        .auth
        .lock()
        .map_err(|e| e.to_string())?
        .set(resp.token)?;

    auth::broadcast_perubahan(&app, Some(&claims));

    crate::log_info!("AUTH", "Login berhasil", serde_json::json!({
        "karyawan_id": claims.sub,
        "role": claims.role
    }));

    Ok(LoginResult {
        user: AuthUserData {
            id: claims.sub,
            nama: claims.nama,
            role: claims.role,
        },
        login_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Logout: hapus sesi lokal, beritahu backend best-effort.
#[tauri::command]
pub async fn logout(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
) -> Result<(), String> {
    let sesi = crate::auth::guard::validate_session(&state).ok();

    // Token di backend di-revoke kalau bisa; kegagalan jaringan tidak
    // menahan logout lokal.
    if let Some(ref s) = sesi {
        if let Err(e) = api::auth::logout(&state.api, &s.token).await {
            crate::log_warn!("AUTH", &format!("Logout backend gagal: {}", e));
        }
    }

    state.auth.lock().map_err(|e| e.to_string())?.clear();
    auth::broadcast_perubahan(&app, None);

    if let Some(s) = sesi {
        crate::log_info!("AUTH", "Logout", serde_json::json!({ "karyawan_id": s.claims.sub }));
    }

    Ok(())
}

/// Pulihkan sesi tersimpan saat aplikasi dibuka. `None` berarti harus login.
#[tauri::command]
pub async fn restore_session(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
) -> Result<Option<AuthUserData>, String> {
    let store = state.auth.lock().map_err(|e| e.to_string())?;

    match store.session() {
        Ok(sesi) => {
            auth::broadcast_perubahan(&app, Some(&sesi.claims));
            Ok(Some(AuthUserData {
                id: sesi.claims.sub,
                nama: sesi.claims.nama,
                role: sesi.claims.role,
            }))
        }
        Err(_) => Ok(None),
    }
}

/// Cek apakah sesi masih valid (untuk gerbang role di tiap halaman).
#[tauri::command]
pub async fn check_session(state: tauri::State<'_, AppState>) -> Result<AuthUserData, String> {
    let sesi = crate::auth::guard::validate_session(&state)?;
    Ok(AuthUserData {
        id: sesi.claims.sub,
        nama: sesi.claims.nama,
        role: sesi.claims.role,
    })
}
