//! Rekonsiliasi stok: produk vs ledger mutasi.
//!
//! Field `stok` pada resource produk dan ledger stok-mutasi dicatat backend
//! secara terpisah. Halaman Stok menampilkan keduanya berdampingan: saldo
//! hasil penjumlahan ledger, angka tercatat di produk, dan selisihnya.
//! Role non-admin tidak menerima harga beli maupun nilai stok.

use std::collections::HashMap;

use crate::models::produk::{Kategori, Produk};
use crate::models::stok::{BarisRiwayatStok, CreateStokMutasiPayload, SaldoStok, StokMutasi};

/// Hitung saldo per produk dari seluruh mutasi, gabungkan dengan record
/// produk, urut nama. Produk tanpa mutasi tetap muncul dengan saldo 0.
pub fn rekonsiliasi(
    produk: &[Produk],
    kategori: &[Kategori],
    mutasi: &[StokMutasi],
    admin: bool,
    ambang_menipis: i64,
) -> Vec<SaldoStok> {
    let nama_kategori: HashMap<i64, &str> =
        kategori.iter().map(|k| (k.id, k.nama.as_str())).collect();

    let mut saldo: HashMap<i64, i64> = HashMap::new();
    for m in mutasi {
        let delta = match m.jenis.as_str() {
            "MASUK" => m.jumlah,
            "KELUAR" => -m.jumlah,
            _ => 0,
        };
        *saldo.entry(m.produk_id).or_insert(0) += delta;
    }

    let mut hasil: Vec<SaldoStok> = produk
        .iter()
        .map(|p| {
            let saldo_ledger = saldo.get(&p.id).copied().unwrap_or(0);
            SaldoStok {
                produk_id: p.id,
                produk_nama: p.nama.clone(),
                kategori_nama: p
                    .kategori_id
                    .and_then(|id| nama_kategori.get(&id))
                    .map(|n| n.to_string()),
                stok_tercatat: p.stok,
                saldo_ledger,
                selisih: p.stok - saldo_ledger,
                menipis: p.aktif && p.stok <= ambang_menipis,
                harga_beli: admin.then_some(p.harga_beli),
                nilai_stok: admin.then_some(saldo_ledger as f64 * p.harga_beli),
            }
        })
        .collect();

    hasil.sort_by(|a, b| a.produk_nama.cmp(&b.produk_nama));
    hasil
}

/// Riwayat mutasi dengan saldo berjalan per produk, terbaru dulu.
///
/// Saldo berjalan dihitung kronologis (created_at lalu id sebagai
/// tie-break) mulai dari nol; baris teratas memuat saldo ledger terkini.
pub fn riwayat_berjalan(produk: &[Produk], mutasi: &[StokMutasi]) -> Vec<BarisRiwayatStok> {
    let nama_produk: HashMap<i64, &str> = produk.iter().map(|p| (p.id, p.nama.as_str())).collect();

    let mut urut: Vec<&StokMutasi> = mutasi.iter().collect();
    urut.sort_by(|a, b| {
        let wa = crate::feed::parse_waktu(&a.created_at);
        let wb = crate::feed::parse_waktu(&b.created_at);
        wa.cmp(&wb).then_with(|| a.id.cmp(&b.id))
    });

    let mut berjalan: HashMap<i64, i64> = HashMap::new();
    let mut baris: Vec<BarisRiwayatStok> = urut
        .into_iter()
        .map(|m| {
            let delta = match m.jenis.as_str() {
                "MASUK" => m.jumlah,
                "KELUAR" => -m.jumlah,
                _ => 0,
            };
            let saldo = berjalan.entry(m.produk_id).or_insert(0);
            *saldo += delta;

            BarisRiwayatStok {
                mutasi_id: m.id,
                produk_id: m.produk_id,
                produk_nama: nama_produk
                    .get(&m.produk_id)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| format!("produk #{}", m.produk_id)),
                jenis: m.jenis.clone(),
                jumlah: m.jumlah,
                saldo_berjalan: *saldo,
                keterangan: m.keterangan.clone(),
                created_at: m.created_at.clone(),
            }
        })
        .collect();

    baris.reverse();
    baris
}

/// Validasi payload mutasi sebelum dikirim ke backend.
pub fn validasi_mutasi(payload: &CreateStokMutasiPayload) -> Result<(), String> {
    if payload.jenis != "MASUK" && payload.jenis != "KELUAR" {
        return Err("Jenis mutasi harus MASUK atau KELUAR".into());
    }

    if payload.jumlah <= 0 {
        return Err("Jumlah mutasi harus lebih dari 0".into());
    }

    if let Some(ref ket) = payload.keterangan {
        crate::validation::validate_keterangan(ket)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn produk(id: i64, nama: &str, stok: i64, kategori_id: Option<i64>) -> Produk {
        Produk {
            id,
            kategori_id,
            sku: None,
            nama: nama.into(),
            harga_jual: 10_000.0,
            harga_beli: 7_500.0,
            stok,
            aktif: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn mutasi(id: i64, produk_id: i64, jenis: &str, jumlah: i64, waktu: &str) -> StokMutasi {
        StokMutasi {
            id,
            produk_id,
            jenis: jenis.into(),
            jumlah,
            keterangan: None,
            created_at: Some(waktu.into()),
        }
    }

    #[test]
    fn saldo_ledger_masuk_dikurangi_keluar() {
        let prod = vec![produk(1, "Kopi", 8, None)];
        let mut_ = vec![
            mutasi(1, 1, "MASUK", 10, "2024-05-01 08:00:00"),
            mutasi(2, 1, "KELUAR", 3, "2024-05-02 08:00:00"),
        ];

        let hasil = rekonsiliasi(&prod, &[], &mut_, true, 5);
        assert_eq!(hasil.len(), 1);
        assert_eq!(hasil[0].saldo_ledger, 7);
        assert_eq!(hasil[0].stok_tercatat, 8);
        assert_eq!(hasil[0].selisih, 1);
    }

    #[test]
    fn produk_tanpa_mutasi_saldo_nol() {
        let prod = vec![produk(1, "Kopi", 4, None)];
        let hasil = rekonsiliasi(&prod, &[], &[], true, 5);
        assert_eq!(hasil[0].saldo_ledger, 0);
        assert_eq!(hasil[0].selisih, 4);
        assert!(hasil[0].menipis);
    }

    #[test]
    fn non_admin_tanpa_harga_beli() {
        let prod = vec![produk(1, "Kopi", 8, None)];
        let mut_ = vec![mutasi(1, 1, "MASUK", 8, "2024-05-01 08:00:00")];

        let admin = rekonsiliasi(&prod, &[], &mut_, true, 5);
        assert_eq!(admin[0].harga_beli, Some(7_500.0));
        assert_eq!(admin[0].nilai_stok, Some(8.0 * 7_500.0));

        let kasir = rekonsiliasi(&prod, &[], &mut_, false, 5);
        assert!(kasir[0].harga_beli.is_none());
        assert!(kasir[0].nilai_stok.is_none());
    }

    #[test]
    fn nama_kategori_ikut_tergabung() {
        let prod = vec![produk(1, "Kopi", 8, Some(2))];
        let kat = vec![Kategori {
            id: 2,
            nama: "Minuman".into(),
        }];

        let hasil = rekonsiliasi(&prod, &kat, &[], true, 5);
        assert_eq!(hasil[0].kategori_nama.as_deref(), Some("Minuman"));
    }

    #[test]
    fn hasil_terurut_nama() {
        let prod = vec![
            produk(1, "Teh", 10, None),
            produk(2, "Beras", 10, None),
            produk(3, "Kopi", 10, None),
        ];

        let hasil = rekonsiliasi(&prod, &[], &[], true, 5);
        let nama: Vec<&str> = hasil.iter().map(|s| s.produk_nama.as_str()).collect();
        assert_eq!(nama, vec!["Beras", "Kopi", "Teh"]);
    }

    #[test]
    fn riwayat_saldo_berjalan_kronologis() {
        let prod = vec![produk(1, "Kopi", 0, None)];
        let mut_ = vec![
            mutasi(3, 1, "KELUAR", 2, "2024-05-03 08:00:00"),
            mutasi(1, 1, "MASUK", 10, "2024-05-01 08:00:00"),
            mutasi(2, 1, "KELUAR", 4, "2024-05-02 08:00:00"),
        ];

        let baris = riwayat_berjalan(&prod, &mut_);
        // Terbaru dulu
        assert_eq!(baris[0].mutasi_id, 3);
        assert_eq!(baris[0].saldo_berjalan, 4);
        assert_eq!(baris[1].saldo_berjalan, 6);
        assert_eq!(baris[2].saldo_berjalan, 10);
    }

    #[test]
    fn riwayat_per_produk_terpisah() {
        let prod = vec![produk(1, "Kopi", 0, None), produk(2, "Teh", 0, None)];
        let mut_ = vec![
            mutasi(1, 1, "MASUK", 5, "2024-05-01 08:00:00"),
            mutasi(2, 2, "MASUK", 9, "2024-05-01 09:00:00"),
        ];

        let baris = riwayat_berjalan(&prod, &mut_);
        let kopi = baris.iter().find(|b| b.produk_id == 1).unwrap();
        let teh = baris.iter().find(|b| b.produk_id == 2).unwrap();
        assert_eq!(kopi.saldo_berjalan, 5);
        assert_eq!(teh.saldo_berjalan, 9);
    }

    #[test]
    fn tie_break_id_saat_waktu_sama() {
        let prod = vec![produk(1, "Kopi", 0, None)];
        let mut_ = vec![
            mutasi(2, 1, "KELUAR", 1, "2024-05-01 08:00:00"),
            mutasi(1, 1, "MASUK", 3, "2024-05-01 08:00:00"),
        ];

        let baris = riwayat_berjalan(&prod, &mut_);
        // id 1 diproses dulu: 3, lalu id 2: 2
        assert_eq!(baris[0].mutasi_id, 2);
        assert_eq!(baris[0].saldo_berjalan, 2);
    }

    #[test]
    fn validasi_mutasi_menolak_payload_salah() {
        let mut payload = CreateStokMutasiPayload {
            produk_id: 1,
            jenis: "MASUK".into(),
            jumlah: 5,
            keterangan: None,
        };
        assert!(validasi_mutasi(&payload).is_ok());

        payload.jenis = "PINJAM".into();
        assert!(validasi_mutasi(&payload).is_err());

        payload.jenis = "KELUAR".into();
        payload.jumlah = 0;
        assert!(validasi_mutasi(&payload).is_err());
    }
}
