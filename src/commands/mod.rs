pub mod auth_cmd;
pub mod dashboard_cmd;
pub mod karyawan_cmd;
pub mod pelanggan_cmd;
pub mod pembayaran_cmd;
pub mod pengiriman_cmd;
pub mod produk_cmd;
pub mod stok_cmd;
pub mod transaksi_cmd;
