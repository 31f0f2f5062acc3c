//! Agregasi laporan di sisi klien.
//!
//! Backend hanya menyajikan resource mentah; angka dashboard, grafik
//! pendapatan, dan peringkat produk dihitung dari slice yang sudah
//! diambil halaman.

use std::collections::HashMap;

use crate::models::laporan::{ProdukTerlaris, StatistikDashboard, TitikGrafik};
use crate::models::pembayaran::Pembayaran;
use crate::models::pengiriman::Pengiriman;
use crate::models::produk::Produk;
use crate::models::transaksi::Transaksi;

/// Ambil "YYYY-MM-DD" dari timestamp backend.
pub fn tanggal_saja(waktu: &Option<String>) -> Option<&str> {
    let s = waktu.as_deref()?.trim();
    if s.len() < 10 {
        return None;
    }
    Some(&s[..10])
}

/// Angka ringkas dashboard untuk satu tanggal (YYYY-MM-DD).
pub fn statistik_dashboard(
    tanggal: &str,
    pembayaran: &[Pembayaran],
    transaksi_hari_ini: i64,
    total_pelanggan: i64,
    produk: &[Produk],
    pengiriman: &[Pengiriman],
    ambang_menipis: i64,
) -> StatistikDashboard {
    let pendapatan_hari_ini = pembayaran
        .iter()
        .filter(|p| p.status == "LUNAS" && tanggal_saja(&p.tanggal) == Some(tanggal))
        .map(|p| p.total_bayar)
        .sum();

    let pembayaran_tertunda = pembayaran.iter().filter(|p| p.status == "PENDING").count() as i64;

    let produk_menipis = produk
        .iter()
        .filter(|p| p.aktif && p.stok <= ambang_menipis)
        .count() as i64;

    let pengiriman_berjalan = pengiriman
        .iter()
        .filter(|k| k.status == "DISIAPKAN" || k.status == "DIKIRIM")
        .count() as i64;

    StatistikDashboard {
        pendapatan_hari_ini,
        transaksi_hari_ini,
        pembayaran_tertunda,
        total_pelanggan,
        produk_menipis,
        pengiriman_berjalan,
    }
}

/// Grafik pendapatan harian dari pembayaran LUNAS pada rentang
/// [mulai, sampai] inklusif, urut tanggal naik.
pub fn grafik_penjualan(pembayaran: &[Pembayaran], mulai: &str, sampai: &str) -> Vec<TitikGrafik> {
    let mut per_tanggal: HashMap<String, (f64, i64)> = HashMap::new();

    for p in pembayaran {
        if p.status != "LUNAS" {
            continue;
        }
        let Some(t) = tanggal_saja(&p.tanggal) else {
            continue;
        };
        if t < mulai || t > sampai {
            continue;
        }

        let entry = per_tanggal.entry(t.to_string()).or_insert((0.0, 0));
        entry.0 += p.total_bayar;
        entry.1 += 1;
    }

    let mut titik: Vec<TitikGrafik> = per_tanggal
        .into_iter()
        .map(|(tanggal, (pendapatan, jumlah))| TitikGrafik {
            tanggal,
            pendapatan,
            jumlah,
        })
        .collect();

    titik.sort_by(|a, b| a.tanggal.cmp(&b.tanggal));
    titik
}

/// Produk terlaris dari item transaksi, transaksi BATAL tidak dihitung.
pub fn produk_terlaris(
    transaksi: &[Transaksi],
    produk: &[Produk],
    limit: usize,
) -> Vec<ProdukTerlaris> {
    let nama_produk: HashMap<i64, &str> = produk.iter().map(|p| (p.id, p.nama.as_str())).collect();

    let mut akumulasi: HashMap<i64, (i64, f64)> = HashMap::new();
    for t in transaksi {
        if t.status == "BATAL" {
            continue;
        }
        for item in &t.items {
            let entry = akumulasi.entry(item.produk_id).or_insert((0, 0.0));
            entry.0 += item.jumlah;
            entry.1 += item.subtotal;
        }
    }

    let mut peringkat: Vec<ProdukTerlaris> = akumulasi
        .into_iter()
        .map(|(produk_id, (total_terjual, total_pendapatan))| ProdukTerlaris {
            produk_id,
            nama: nama_produk
                .get(&produk_id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("produk #{}", produk_id)),
            total_terjual,
            total_pendapatan,
        })
        .collect();

    peringkat.sort_by(|a, b| {
        b.total_terjual
            .cmp(&a.total_terjual)
            .then_with(|| a.produk_id.cmp(&b.produk_id))
    });
    peringkat.truncate(limit);
    peringkat
}

/// Render grafik penjualan jadi CSV untuk diekspor.
pub fn render_csv(titik: &[TitikGrafik]) -> String {
    let mut out = String::from("tanggal,pendapatan,jumlah_transaksi\n");
    for t in titik {
        out.push_str(&format!("{},{:.0},{}\n", t.tanggal, t.pendapatan, t.jumlah));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaksi::TransaksiItem;

    fn pembayaran(id: i64, status: &str, total: f64, tanggal: &str) -> Pembayaran {
        Pembayaran {
            id,
            transaksi_id: format!("TRX-{}", id),
            metode: "TUNAI".into(),
            total_bayar: total,
            status: status.into(),
            tanggal: Some(tanggal.into()),
        }
    }

    fn item(produk_id: i64, jumlah: i64, subtotal: f64) -> TransaksiItem {
        TransaksiItem {
            produk_id,
            jumlah,
            harga_satuan: subtotal / jumlah as f64,
            subtotal,
        }
    }

    fn transaksi(id: &str, status: &str, items: Vec<TransaksiItem>) -> Transaksi {
        let total = items.iter().map(|i| i.subtotal).sum();
        Transaksi {
            id: id.into(),
            pelanggan_id: None,
            kasir_id: 1,
            items,
            status: status.into(),
            total_harga: total,
            created_at: Some("2024-05-01 10:00:00".into()),
        }
    }

    fn produk(id: i64, nama: &str, stok: i64) -> Produk {
        Produk {
            id,
            kategori_id: None,
            sku: None,
            nama: nama.into(),
            harga_jual: 1_000.0,
            harga_beli: 800.0,
            stok,
            aktif: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn statistik_hanya_hitung_lunas_hari_itu() {
        let bayar = vec![
            pembayaran(1, "LUNAS", 100_000.0, "2024-05-02 09:00:00"),
            pembayaran(2, "LUNAS", 50_000.0, "2024-05-01 09:00:00"),
            pembayaran(3, "PENDING", 75_000.0, "2024-05-02 10:00:00"),
        ];
        let prod = vec![produk(1, "Kopi", 2), produk(2, "Teh", 50)];
        let kirim = vec![
            Pengiriman {
                id: 1,
                transaksi_id: "TRX-1".into(),
                driver_id: None,
                jenis: "KURIR".into(),
                status: "DIKIRIM".into(),
                created_at: None,
                updated_at: None,
            },
            Pengiriman {
                id: 2,
                transaksi_id: "TRX-2".into(),
                driver_id: None,
                jenis: "KURIR".into(),
                status: "TIBA".into(),
                created_at: None,
                updated_at: None,
            },
        ];

        let stat = statistik_dashboard("2024-05-02", &bayar, 4, 12, &prod, &kirim, 5);
        assert_eq!(stat.pendapatan_hari_ini, 100_000.0);
        assert_eq!(stat.transaksi_hari_ini, 4);
        assert_eq!(stat.pembayaran_tertunda, 1);
        assert_eq!(stat.total_pelanggan, 12);
        assert_eq!(stat.produk_menipis, 1);
        assert_eq!(stat.pengiriman_berjalan, 1);
    }

    #[test]
    fn grafik_kelompok_per_tanggal() {
        let bayar = vec![
            pembayaran(1, "LUNAS", 10_000.0, "2024-05-01 08:00:00"),
            pembayaran(2, "LUNAS", 15_000.0, "2024-05-01 12:00:00"),
            pembayaran(3, "LUNAS", 20_000.0, "2024-05-03 08:00:00"),
            pembayaran(4, "GAGAL", 99_000.0, "2024-05-03 09:00:00"),
            pembayaran(5, "LUNAS", 5_000.0, "2024-04-30 09:00:00"),
        ];

        let titik = grafik_penjualan(&bayar, "2024-05-01", "2024-05-31");
        assert_eq!(
            titik,
            vec![
                TitikGrafik {
                    tanggal: "2024-05-01".into(),
                    pendapatan: 25_000.0,
                    jumlah: 2
                },
                TitikGrafik {
                    tanggal: "2024-05-03".into(),
                    pendapatan: 20_000.0,
                    jumlah: 1
                },
            ]
        );
    }

    #[test]
    fn terlaris_abaikan_batal() {
        let trx = vec![
            transaksi("A", "SELESAI", vec![item(1, 3, 30_000.0), item(2, 1, 5_000.0)]),
            transaksi("B", "SELESAI", vec![item(1, 2, 20_000.0)]),
            transaksi("C", "BATAL", vec![item(2, 50, 250_000.0)]),
        ];
        let prod = vec![produk(1, "Kopi", 10), produk(2, "Teh", 10)];

        let peringkat = produk_terlaris(&trx, &prod, 10);
        assert_eq!(peringkat.len(), 2);
        assert_eq!(peringkat[0].nama, "Kopi");
        assert_eq!(peringkat[0].total_terjual, 5);
        assert_eq!(peringkat[0].total_pendapatan, 50_000.0);
        assert_eq!(peringkat[1].total_terjual, 1);
    }

    #[test]
    fn terlaris_limit_dan_produk_tak_dikenal() {
        let trx = vec![transaksi(
            "A",
            "SELESAI",
            vec![item(1, 3, 3_000.0), item(9, 2, 2_000.0)],
        )];
        let prod = vec![produk(1, "Kopi", 10)];

        let peringkat = produk_terlaris(&trx, &prod, 1);
        assert_eq!(peringkat.len(), 1);
        assert_eq!(peringkat[0].nama, "Kopi");

        let semua = produk_terlaris(&trx, &prod, 10);
        assert_eq!(semua[1].nama, "produk #9");
    }

    #[test]
    fn csv_dengan_header() {
        let titik = vec![TitikGrafik {
            tanggal: "2024-05-01".into(),
            pendapatan: 25_000.0,
            jumlah: 2,
        }];

        let csv = render_csv(&titik);
        assert_eq!(csv, "tanggal,pendapatan,jumlah_transaksi\n2024-05-01,25000,2\n");
    }
}
