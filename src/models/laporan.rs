use serde::{Deserialize, Serialize};

/// Angka-angka ringkas di atas dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatistikDashboard {
    pub pendapatan_hari_ini: f64,
    pub transaksi_hari_ini: i64,
    pub pembayaran_tertunda: i64,
    pub total_pelanggan: i64,
    pub produk_menipis: i64,
    pub pengiriman_berjalan: i64,
}

/// Satu titik pada grafik pendapatan harian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitikGrafik {
    pub tanggal: String, // "YYYY-MM-DD"
    pub pendapatan: f64,
    pub jumlah: i64,
}

/// Produk terlaris pada suatu periode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProdukTerlaris {
    pub produk_id: i64,
    pub nama: String,
    pub total_terjual: i64,
    pub total_pendapatan: f64,
}
