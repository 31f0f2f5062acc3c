use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::errors::AppError;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Backend mengembalikan token bearer; klaim dibaca dari payload-nya.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<LoginResponse, AppError> {
    api.post_tanpa_auth("/auth/login", &LoginRequest { email, password })
        .await
}

/// Beritahu backend token ini tidak dipakai lagi. Kegagalan tidak fatal,
/// sesi lokal tetap dihapus.
pub async fn logout(api: &ApiClient, token: &str) -> Result<(), AppError> {
    let _: serde_json::Value = api.post(token, "/auth/logout", &serde_json::json!({})).await?;
    Ok(())
}
