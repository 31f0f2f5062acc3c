use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StokMutasi {
    pub id: i64,
    pub produk_id: i64,
    pub jenis: String, // "MASUK" | "KELUAR"
    pub jumlah: i64,
    pub keterangan: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStokMutasiPayload {
    pub produk_id: i64,
    pub jenis: String,
    pub jumlah: i64,
    pub keterangan: Option<String>,
}

/// Saldo satu produk hasil rekonsiliasi ledger.
///
/// `stok_tercatat` adalah field stok dari resource produk; `saldo_ledger`
/// dihitung dari mutasi. Selisih keduanya menandakan pencatatan yang
/// tertinggal di salah satu sisi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaldoStok {
    pub produk_id: i64,
    pub produk_nama: String,
    pub kategori_nama: Option<String>,
    pub stok_tercatat: i64,
    pub saldo_ledger: i64,
    pub selisih: i64,
    pub menipis: bool,
    /// Hanya terisi untuk admin.
    pub harga_beli: Option<f64>,
    /// Nilai stok = saldo ledger × harga beli. Hanya untuk admin.
    pub nilai_stok: Option<f64>,
}

/// Satu baris riwayat mutasi dengan saldo berjalan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarisRiwayatStok {
    pub mutasi_id: i64,
    pub produk_id: i64,
    pub produk_nama: String,
    pub jenis: String,
    pub jumlah: i64,
    pub saldo_berjalan: i64,
    pub keterangan: Option<String>,
    pub created_at: Option<String>,
}
