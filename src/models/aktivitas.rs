use serde::{Deserialize, Serialize};

/// Jenis entri pada activity feed gabungan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JenisAktivitas {
    PembayaranMasuk,
    TransaksiBaru,
    TransaksiBatal,
    Pengiriman,
    PelangganBaru,
    ProdukBaru,
    StokMenipis,
}

impl JenisAktivitas {
    pub fn as_str(&self) -> &'static str {
        match self {
            JenisAktivitas::PembayaranMasuk => "PEMBAYARAN_MASUK",
            JenisAktivitas::TransaksiBaru => "TRANSAKSI_BARU",
            JenisAktivitas::TransaksiBatal => "TRANSAKSI_BATAL",
            JenisAktivitas::Pengiriman => "PENGIRIMAN",
            JenisAktivitas::PelangganBaru => "PELANGGAN_BARU",
            JenisAktivitas::ProdukBaru => "PRODUK_BARU",
            JenisAktivitas::StokMenipis => "STOK_MENIPIS",
        }
    }
}

/// Satu entri feed. `ref_id` menunjuk ke resource asalnya.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aktivitas {
    pub jenis: JenisAktivitas,
    pub ref_id: String,
    pub judul: String,
    pub keterangan: String,
    pub waktu: Option<String>,
}

/// Halaman feed setelah sort + paginate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedAktivitas {
    pub data: Vec<Aktivitas>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}
