use serde::{Deserialize, Serialize};

/// Produk persis seperti dikirim backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Produk {
    pub id: i64,
    pub kategori_id: Option<i64>,
    pub sku: Option<String>,
    pub nama: String,
    pub harga_jual: f64,
    pub harga_beli: f64,
    pub stok: i64,
    pub aktif: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Produk dengan nama kategori, siap ditampilkan di tabel.
/// `harga_beli` dikosongkan untuk role non-admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProdukTampilan {
    pub id: i64,
    pub kategori_id: Option<i64>,
    pub kategori_nama: Option<String>,
    pub sku: Option<String>,
    pub nama: String,
    pub harga_jual: f64,
    pub harga_beli: Option<f64>,
    pub stok: i64,
    pub aktif: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kategori {
    pub id: i64,
    pub nama: String,
}

/// Kategori dengan jumlah produk di dalamnya.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KategoriDenganJumlah {
    pub id: i64,
    pub nama: String,
    pub jumlah_produk: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProdukPayload {
    pub nama: String,
    pub sku: Option<String>,
    pub kategori_id: Option<i64>,
    pub harga_jual: f64,
    pub harga_beli: f64,
    pub stok: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProdukPayload {
    pub nama: String,
    pub sku: Option<String>,
    pub kategori_id: Option<i64>,
    pub harga_jual: f64,
    pub harga_beli: f64,
    pub aktif: bool,
}
