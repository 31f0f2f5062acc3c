use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pembayaran {
    pub id: i64,
    pub transaksi_id: String,
    pub metode: String, // "TUNAI" | "TRANSFER" | "QRIS"
    pub total_bayar: f64,
    pub status: String, // "PENDING" | "LUNAS" | "GAGAL"
    pub tanggal: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePembayaranPayload {
    pub transaksi_id: String,
    pub metode: String,
    pub total_bayar: f64,
}

/// Status terakhir satu pembayaran (untuk polling dari halaman kasir).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusPembayaran {
    pub id: i64,
    pub status: String,
    pub tanggal: Option<String>,
}
