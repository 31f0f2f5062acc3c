use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pelanggan {
    pub id: i64,
    pub nama: String,
    pub email: Option<String>,
    pub no_hp: Option<String>,
    pub alamat: Option<String>,
    pub created_at: Option<String>,
}

/// Pelanggan untuk tabel. Kontak dimask untuk role non-admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PelangganTampilan {
    pub id: i64,
    pub nama: String,
    pub email: Option<String>,
    pub no_hp: Option<String>,
    pub alamat: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePelangganPayload {
    pub nama: String,
    pub email: Option<String>,
    pub no_hp: Option<String>,
    pub alamat: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePelangganPayload {
    pub nama: String,
    pub email: Option<String>,
    pub no_hp: Option<String>,
    pub alamat: Option<String>,
}
