use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Karyawan {
    pub id: i64,
    pub nama: String,
    pub email: String,
    pub role: String, // "ADMIN" | "KASIR" | "DRIVER"
    pub aktif: bool,
    pub created_at: Option<String>,
    pub last_login_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKaryawanPayload {
    pub nama: String,
    pub email: String,
    pub role: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateKaryawanPayload {
    pub nama: String,
    pub email: String,
    pub role: String,
}

/// Data karyawan yang sedang login, dikirim ke frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUserData {
    pub id: i64,
    pub nama: String,
    pub role: String,
}

/// Hasil login yang dikirim ke frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub user: AuthUserData,
    pub login_at: String,
}
