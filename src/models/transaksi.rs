use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaksi {
    pub id: String, // UUID v4
    pub pelanggan_id: Option<i64>,
    pub kasir_id: i64,
    pub items: Vec<TransaksiItem>,
    pub status: String, // "BARU" | "DIPROSES" | "SELESAI" | "BATAL"
    pub total_harga: f64,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransaksiItem {
    pub produk_id: i64,
    pub jumlah: i64,
    pub harga_satuan: f64,
    pub subtotal: f64,
}

/// Baris daftar transaksi dengan nama pelanggan dan kasir.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransaksiTampilan {
    pub id: String,
    pub pelanggan_id: Option<i64>,
    pub pelanggan_nama: Option<String>,
    pub kasir_id: i64,
    pub kasir_nama: Option<String>,
    pub status: String,
    pub total_harga: f64,
    pub jumlah_item: i64,
    pub created_at: Option<String>,
}

/// Item dengan nama produk, untuk halaman detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransaksiItemTampilan {
    pub produk_id: i64,
    pub produk_nama: String,
    pub jumlah: i64,
    pub harga_satuan: f64,
    pub subtotal: f64,
}

/// Detail lengkap satu transaksi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransaksiDetail {
    pub transaksi: TransaksiTampilan,
    pub items: Vec<TransaksiItemTampilan>,
}

/// Payload membuat transaksi baru. Backend menghitung subtotal dan total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransaksiPayload {
    pub pelanggan_id: Option<i64>,
    pub items: Vec<CreateTransaksiItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransaksiItem {
    pub produk_id: i64,
    pub jumlah: i64,
}

/// Hasil paginated untuk daftar transaksi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedTransaksi {
    pub data: Vec<TransaksiTampilan>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}
