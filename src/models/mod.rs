pub mod aktivitas;
pub mod karyawan;
pub mod laporan;
pub mod pelanggan;
pub mod pembayaran;
pub mod pengiriman;
pub mod produk;
pub mod stok;
pub mod transaksi;
