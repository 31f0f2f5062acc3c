//! Activity feed gabungan untuk dashboard.
//!
//! Feed dirakit murni di sisi klien dari respons REST yang sudah diambil:
//! pembayaran, transaksi, pengiriman, pelanggan, dan produk digabung jadi
//! satu aliran kronologis. Viewer non-admin mendapat versi privacy-aware:
//! nama pelanggan disingkat dan nomor HP dimask.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::aktivitas::{Aktivitas, JenisAktivitas, PaginatedAktivitas};
use crate::models::pelanggan::Pelanggan;
use crate::models::pembayaran::Pembayaran;
use crate::models::pengiriman::Pengiriman;
use crate::models::produk::Produk;
use crate::models::transaksi::Transaksi;

/// Potongan respons REST yang menjadi bahan feed.
pub struct SumberFeed<'a> {
    pub pembayaran: &'a [Pembayaran],
    pub transaksi: &'a [Transaksi],
    pub pengiriman: &'a [Pengiriman],
    pub pelanggan: &'a [Pelanggan],
    pub produk: &'a [Produk],
}

/// Rakit seluruh entri feed, terurut terbaru dulu.
///
/// Urutan deterministik: waktu turun, lalu (jenis, ref_id) sebagai
/// tie-break agar refresh berulang tidak mengacak baris sewaktu.
pub fn susun_feed(sumber: &SumberFeed, admin: bool, ambang_menipis: i64) -> Vec<Aktivitas> {
    let mut entri: Vec<Aktivitas> = Vec::new();

    for p in sumber.pembayaran {
        if p.status != "LUNAS" {
            continue;
        }
        entri.push(Aktivitas {
            jenis: JenisAktivitas::PembayaranMasuk,
            ref_id: p.id.to_string(),
            judul: format!("Pembayaran {} diterima", p.metode),
            keterangan: format!(
                "Rp {:.0} untuk transaksi {}",
                p.total_bayar, p.transaksi_id
            ),
            waktu: p.tanggal.clone(),
        });
    }

    for t in sumber.transaksi {
        let nama_pelanggan = t
            .pelanggan_id
            .and_then(|id| sumber.pelanggan.iter().find(|pl| pl.id == id))
            .map(|pl| tampilkan_nama(&pl.nama, admin))
            .unwrap_or_else(|| "umum".to_string());

        let (jenis, judul) = if t.status == "BATAL" {
            (JenisAktivitas::TransaksiBatal, "Transaksi dibatalkan")
        } else {
            (JenisAktivitas::TransaksiBaru, "Transaksi baru")
        };

        entri.push(Aktivitas {
            jenis,
            ref_id: t.id.clone(),
            judul: judul.to_string(),
            keterangan: format!(
                "{} item, Rp {:.0}, pelanggan {}",
                t.items.len(),
                t.total_harga,
                nama_pelanggan
            ),
            waktu: t.created_at.clone(),
        });
    }

    for k in sumber.pengiriman {
        entri.push(Aktivitas {
            jenis: JenisAktivitas::Pengiriman,
            ref_id: k.id.to_string(),
            judul: format!("Pengiriman {}", k.status),
            keterangan: format!("{} untuk transaksi {}", k.jenis, k.transaksi_id),
            waktu: k.updated_at.clone().or_else(|| k.created_at.clone()),
        });
    }

    for pl in sumber.pelanggan {
        entri.push(Aktivitas {
            jenis: JenisAktivitas::PelangganBaru,
            ref_id: pl.id.to_string(),
            judul: "Pelanggan baru".to_string(),
            keterangan: match (&pl.no_hp, admin) {
                (Some(hp), false) => {
                    format!("{} ({})", tampilkan_nama(&pl.nama, false), mask_no_hp(hp))
                }
                (Some(hp), true) => format!("{} ({})", pl.nama, hp),
                (None, _) => tampilkan_nama(&pl.nama, admin),
            },
            waktu: pl.created_at.clone(),
        });
    }

    for pr in sumber.produk {
        entri.push(Aktivitas {
            jenis: JenisAktivitas::ProdukBaru,
            ref_id: pr.id.to_string(),
            judul: "Produk baru".to_string(),
            keterangan: format!("{} (Rp {:.0})", pr.nama, pr.harga_jual),
            waktu: pr.created_at.clone(),
        });

        if pr.aktif && pr.stok <= ambang_menipis {
            entri.push(Aktivitas {
                jenis: JenisAktivitas::StokMenipis,
                ref_id: pr.id.to_string(),
                judul: "Stok menipis".to_string(),
                keterangan: format!("{} tersisa {}", pr.nama, pr.stok),
                // Alert mengikuti waktu update produk supaya naik ke atas feed
                waktu: pr.updated_at.clone().or_else(|| pr.created_at.clone()),
            });
        }
    }

    entri.sort_by(|a, b| {
        let wa = parse_waktu(&a.waktu);
        let wb = parse_waktu(&b.waktu);
        wb.cmp(&wa)
            .then_with(|| a.jenis.as_str().cmp(b.jenis.as_str()))
            .then_with(|| a.ref_id.cmp(&b.ref_id))
    });

    entri
}

/// Potong feed yang sudah terurut jadi satu halaman.
pub fn paginate(entri: Vec<Aktivitas>, page: i64, per_page: i64) -> PaginatedAktivitas {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total = entri.len() as i64;

    let awal = ((page - 1) * per_page) as usize;
    let data: Vec<Aktivitas> = entri
        .into_iter()
        .skip(awal)
        .take(per_page as usize)
        .collect();

    PaginatedAktivitas {
        data,
        total,
        page,
        per_page,
    }
}

/// Nama lengkap untuk admin, singkatan untuk role lain.
fn tampilkan_nama(nama: &str, admin: bool) -> String {
    if admin {
        nama.to_string()
    } else {
        mask_nama(nama)
    }
}

/// "Budi Santoso" -> "Budi S."
pub fn mask_nama(nama: &str) -> String {
    let mut kata = nama.split_whitespace();
    let depan = match kata.next() {
        Some(k) => k,
        None => return String::new(),
    };

    let inisial: String = kata
        .filter_map(|k| k.chars().next())
        .map(|c| format!(" {}.", c))
        .collect();

    format!("{}{}", depan, inisial)
}

/// "081234567890" -> "0812****90"
pub fn mask_no_hp(no_hp: &str) -> String {
    let digit: Vec<char> = no_hp.chars().collect();
    if digit.len() <= 6 {
        return "****".to_string();
    }

    let depan: String = digit[..4].iter().collect();
    let belakang: String = digit[digit.len() - 2..].iter().collect();
    format!("{}****{}", depan, belakang)
}

/// Timestamp backend bisa RFC 3339, "YYYY-MM-DD HH:MM:SS", atau tanggal
/// saja. Entri tanpa waktu terparse jatuh ke paling bawah feed.
pub fn parse_waktu(waktu: &Option<String>) -> Option<DateTime<Utc>> {
    let s = waktu.as_deref()?.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|n| n.and_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaksi::TransaksiItem;

    fn pembayaran(id: i64, status: &str, tanggal: &str) -> Pembayaran {
        Pembayaran {
            id,
            transaksi_id: format!("TRX-{}", id),
            metode: "QRIS".into(),
            total_bayar: 150_000.0,
            status: status.into(),
            tanggal: Some(tanggal.into()),
        }
    }

    fn transaksi(id: &str, status: &str, pelanggan_id: Option<i64>, waktu: &str) -> Transaksi {
        Transaksi {
            id: id.into(),
            pelanggan_id,
            kasir_id: 1,
            items: vec![TransaksiItem {
                produk_id: 1,
                jumlah: 2,
                harga_satuan: 5_000.0,
                subtotal: 10_000.0,
            }],
            status: status.into(),
            total_harga: 10_000.0,
            created_at: Some(waktu.into()),
        }
    }

    fn pelanggan(id: i64, nama: &str, no_hp: Option<&str>) -> Pelanggan {
        Pelanggan {
            id,
            nama: nama.into(),
            email: None,
            no_hp: no_hp.map(String::from),
            alamat: None,
            created_at: Some("2024-05-01 08:00:00".into()),
        }
    }

    fn produk(id: i64, nama: &str, stok: i64) -> Produk {
        Produk {
            id,
            kategori_id: None,
            sku: None,
            nama: nama.into(),
            harga_jual: 12_000.0,
            harga_beli: 9_000.0,
            stok,
            aktif: true,
            created_at: Some("2024-05-01 07:00:00".into()),
            updated_at: Some("2024-05-03 07:00:00".into()),
        }
    }

    #[test]
    fn mask_nama_menyingkat() {
        assert_eq!(mask_nama("Budi Santoso"), "Budi S.");
        assert_eq!(mask_nama("Budi Agus Santoso"), "Budi A. S.");
        assert_eq!(mask_nama("Budi"), "Budi");
        assert_eq!(mask_nama(""), "");
    }

    #[test]
    fn mask_no_hp_sembunyikan_tengah() {
        assert_eq!(mask_no_hp("081234567890"), "0812****90");
        assert_eq!(mask_no_hp("0812"), "****");
    }

    #[test]
    fn pembayaran_pending_tidak_masuk_feed() {
        let bayar = vec![
            pembayaran(1, "LUNAS", "2024-05-02 10:00:00"),
            pembayaran(2, "PENDING", "2024-05-02 11:00:00"),
        ];
        let sumber = SumberFeed {
            pembayaran: &bayar,
            transaksi: &[],
            pengiriman: &[],
            pelanggan: &[],
            produk: &[],
        };

        let feed = susun_feed(&sumber, true, 5);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].ref_id, "1");
        assert_eq!(feed[0].jenis, JenisAktivitas::PembayaranMasuk);
    }

    #[test]
    fn feed_terurut_terbaru_dulu() {
        let bayar = vec![pembayaran(1, "LUNAS", "2024-05-01 10:00:00")];
        let trx = vec![transaksi("TRX-9", "BARU", None, "2024-05-02 10:00:00")];
        let sumber = SumberFeed {
            pembayaran: &bayar,
            transaksi: &trx,
            pengiriman: &[],
            pelanggan: &[],
            produk: &[],
        };

        let feed = susun_feed(&sumber, true, 5);
        assert_eq!(feed[0].ref_id, "TRX-9");
        assert_eq!(feed[1].ref_id, "1");
    }

    #[test]
    fn urutan_stabil_saat_waktu_sama() {
        let bayar = vec![
            pembayaran(2, "LUNAS", "2024-05-01 10:00:00"),
            pembayaran(1, "LUNAS", "2024-05-01 10:00:00"),
        ];
        let sumber = SumberFeed {
            pembayaran: &bayar,
            transaksi: &[],
            pengiriman: &[],
            pelanggan: &[],
            produk: &[],
        };

        let feed = susun_feed(&sumber, true, 5);
        assert_eq!(feed[0].ref_id, "1");
        assert_eq!(feed[1].ref_id, "2");
    }

    #[test]
    fn non_admin_dapat_versi_mask() {
        let pel = vec![pelanggan(4, "Siti Rahayu", Some("081234567890"))];
        let trx = vec![transaksi("TRX-1", "BARU", Some(4), "2024-05-02 09:00:00")];
        let sumber = SumberFeed {
            pembayaran: &[],
            transaksi: &trx,
            pengiriman: &[],
            pelanggan: &pel,
            produk: &[],
        };

        let feed = susun_feed(&sumber, false, 5);
        let entri_trx = feed
            .iter()
            .find(|a| a.jenis == JenisAktivitas::TransaksiBaru)
            .unwrap();
        assert!(entri_trx.keterangan.contains("Siti R."));
        assert!(!entri_trx.keterangan.contains("Rahayu"));

        let entri_pel = feed
            .iter()
            .find(|a| a.jenis == JenisAktivitas::PelangganBaru)
            .unwrap();
        assert!(entri_pel.keterangan.contains("0812****90"));
        assert!(!entri_pel.keterangan.contains("081234567890"));
    }

    #[test]
    fn admin_melihat_data_penuh() {
        let pel = vec![pelanggan(4, "Siti Rahayu", Some("081234567890"))];
        let sumber = SumberFeed {
            pembayaran: &[],
            transaksi: &[],
            pengiriman: &[],
            pelanggan: &pel,
            produk: &[],
        };

        let feed = susun_feed(&sumber, true, 5);
        assert!(feed[0].keterangan.contains("Siti Rahayu"));
        assert!(feed[0].keterangan.contains("081234567890"));
    }

    #[test]
    fn stok_menipis_muncul_di_feed() {
        let prod = vec![produk(7, "Gula 1kg", 3), produk(8, "Beras 5kg", 40)];
        let sumber = SumberFeed {
            pembayaran: &[],
            transaksi: &[],
            pengiriman: &[],
            pelanggan: &[],
            produk: &prod,
        };

        let feed = susun_feed(&sumber, true, 5);
        let alerts: Vec<_> = feed
            .iter()
            .filter(|a| a.jenis == JenisAktivitas::StokMenipis)
            .collect();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].ref_id, "7");
        assert!(alerts[0].keterangan.contains("tersisa 3"));
    }

    #[test]
    fn paginate_memotong_setelah_sort() {
        let bayar: Vec<Pembayaran> = (1..=25)
            .map(|i| pembayaran(i, "LUNAS", &format!("2024-05-{:02} 10:00:00", (i % 28) + 1)))
            .collect();
        let sumber = SumberFeed {
            pembayaran: &bayar,
            transaksi: &[],
            pengiriman: &[],
            pelanggan: &[],
            produk: &[],
        };

        let feed = susun_feed(&sumber, true, 5);
        let hal1 = paginate(feed.clone(), 1, 10);
        assert_eq!(hal1.total, 25);
        assert_eq!(hal1.data.len(), 10);

        let hal3 = paginate(feed.clone(), 3, 10);
        assert_eq!(hal3.data.len(), 5);

        let hal4 = paginate(feed, 4, 10);
        assert!(hal4.data.is_empty());
        assert_eq!(hal4.total, 25);
    }

    #[test]
    fn parse_waktu_berbagai_format() {
        assert!(parse_waktu(&Some("2024-05-01T10:00:00Z".into())).is_some());
        assert!(parse_waktu(&Some("2024-05-01 10:00:00".into())).is_some());
        assert!(parse_waktu(&Some("2024-05-01".into())).is_some());
        assert!(parse_waktu(&Some("bukan tanggal".into())).is_none());
        assert!(parse_waktu(&None).is_none());
    }
}
