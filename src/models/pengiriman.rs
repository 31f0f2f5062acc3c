use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pengiriman {
    pub id: i64,
    pub transaksi_id: String,
    pub driver_id: Option<i64>,
    pub jenis: String,  // "KURIR" | "AMBIL_SENDIRI"
    pub status: String, // "DISIAPKAN" | "DIKIRIM" | "TIBA" | "GAGAL"
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Baris daftar pengiriman dengan nama driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PengirimanTampilan {
    pub id: i64,
    pub transaksi_id: String,
    pub driver_id: Option<i64>,
    pub driver_nama: Option<String>,
    pub jenis: String,
    pub status: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePengirimanPayload {
    pub transaksi_id: String,
    pub driver_id: Option<i64>,
    pub jenis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusPengirimanPayload {
    pub status: String,
}
