use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::encryption;

/// Klaim dari payload JWT yang diterbitkan backend.
///
/// Payload hanya di-decode, tidak diverifikasi. Verifikasi tanda tangan
/// terjadi di backend pada setiap request; klaim di sini semata untuk
/// mirror role check di UI.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub nama: String,
    pub role: String, // "ADMIN" | "KASIR" | "DRIVER"
    pub exp: i64,
}

impl Claims {
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }
}

/// Sesi yang sudah tervalidasi, di-clone keluar dari store.
#[derive(Clone, Debug)]
pub struct SesiAktif {
    pub token: String,
    pub claims: Claims,
}

/// Decode segmen payload sebuah JWT tanpa verifikasi tanda tangan.
pub fn decode_claims(token: &str) -> Result<Claims, String> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_sig)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err("Format token tidak valid".into());
    };

    if parts.next().is_some() {
        return Err("Format token tidak valid".into());
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| "Payload token bukan base64url".to_string())?;

    serde_json::from_slice(&bytes).map_err(|_| "Klaim token tidak lengkap".to_string())
}

/// Pemegang token bearer untuk seluruh aplikasi.
///
/// Token dipersist terenkripsi ke disk (bila diaktifkan di konfigurasi)
/// supaya restart aplikasi tidak memutus sesi.
pub struct TokenStore {
    token: Option<String>,
    claims: Option<Claims>,
    path: Option<PathBuf>,
}

impl TokenStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            token: None,
            claims: None,
            path,
        }
    }

    /// Muat token tersimpan dari disk. Token kadaluarsa langsung dibuang.
    pub fn restore(path: Option<PathBuf>) -> Self {
        let mut store = Self::new(path);

        let Some(ref p) = store.path else {
            return store;
        };

        let Ok(ciphertext) = std::fs::read_to_string(p) else {
            return store;
        };

        match encryption::decrypt(ciphertext.trim()) {
            Ok(token) => match decode_claims(&token) {
                Ok(claims) if !claims.is_expired() => {
                    store.token = Some(token);
                    store.claims = Some(claims);
                }
                _ => {
                    let _ = std::fs::remove_file(p);
                }
            },
            Err(e) => {
                crate::log_warn!("AUTH", &format!("Token tersimpan tidak terbaca: {}", e));
                let _ = std::fs::remove_file(p);
            }
        }

        store
    }

    /// Simpan token baru. Mengembalikan klaim hasil decode.
    pub fn set(&mut self, token: String) -> Result<Claims, String> {
        let claims = decode_claims(&token)?;
        if claims.is_expired() {
            return Err("Token dari server sudah kadaluarsa".into());
        }

        if let Some(ref p) = self.path {
            match encryption::encrypt(&token) {
                Ok(ciphertext) => {
                    if let Err(e) = std::fs::write(p, ciphertext) {
                        crate::log_warn!("AUTH", &format!("Gagal menyimpan token: {}", e));
                    }
                }
                Err(e) => {
                    crate::log_warn!("AUTH", &format!("Gagal mengenkripsi token: {}", e));
                }
            }
        }

        self.token = Some(token);
        self.claims = Some(claims.clone());
        Ok(claims)
    }

    /// Hapus sesi (logout), dari memori dan dari file.
    pub fn clear(&mut self) {
        self.token = None;
        self.claims = None;

        if let Some(ref p) = self.path {
            let _ = std::fs::remove_file(p);
        }
    }

    /// Ambil sesi aktif, cek ada dan belum expired.
    pub fn session(&self) -> Result<SesiAktif, String> {
        match (&self.token, &self.claims) {
            (Some(t), Some(c)) if !c.is_expired() => Ok(SesiAktif {
                token: t.clone(),
                claims: c.clone(),
            }),
            (Some(_), Some(_)) => Err("Sesi expired, silakan login ulang".into()),
            _ => Err("Belum login".into()),
        }
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rakit JWT dummy: header dan signature tidak dibaca decoder.
    fn buat_token(sub: i64, nama: &str, role: &str, exp: i64) -> String {
        let payload = serde_json::json!({
            "sub": sub, "nama": nama, "role": role, "exp": exp
        });
        format!(
            "e30.{}.sig",
            URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes())
        )
    }

    fn exp_besok() -> i64 {
        Utc::now().timestamp() + 86_400
    }

    #[test]
    fn decode_klaim_valid() {
        let token = buat_token(7, "Budi", "ADMIN", exp_besok());
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.nama, "Budi");
        assert!(claims.is_admin());
        assert!(!claims.is_expired());
    }

    #[test]
    fn tolak_format_rusak() {
        assert!(decode_claims("cuma-satu-bagian").is_err());
        assert!(decode_claims("a.b").is_err());
        assert!(decode_claims("a.b.c.d").is_err());
        assert!(decode_claims("e30.!!!bukan-base64.sig").is_err());
    }

    #[test]
    fn tolak_klaim_kurang() {
        // Payload valid base64 tapi tanpa field role
        let payload = serde_json::json!({ "sub": 1, "exp": exp_besok() });
        let token = format!(
            "e30.{}.sig",
            URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes())
        );
        assert!(decode_claims(&token).is_err());
    }

    #[test]
    fn store_set_dan_session() {
        let mut store = TokenStore::new(None);
        let token = buat_token(3, "Sari", "KASIR", exp_besok());

        let claims = store.set(token).unwrap();
        assert_eq!(claims.role, "KASIR");

        let sesi = store.session().unwrap();
        assert_eq!(sesi.claims.sub, 3);

        store.clear();
        assert!(store.session().is_err());
    }

    #[test]
    fn store_tolak_token_expired() {
        let mut store = TokenStore::new(None);
        let token = buat_token(3, "Sari", "KASIR", Utc::now().timestamp() - 10);
        assert!(store.set(token).is_err());
    }

    #[test]
    fn restore_dari_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sesi.dat");

        let token = buat_token(9, "Dewi", "ADMIN", exp_besok());
        let mut store = TokenStore::new(Some(path.clone()));
        store.set(token).unwrap();

        let restored = TokenStore::restore(Some(path.clone()));
        let sesi = restored.session().unwrap();
        assert_eq!(sesi.claims.sub, 9);

        // Setelah clear, file ikut terhapus
        let mut restored = restored;
        restored.clear();
        assert!(!path.exists());
    }

    #[test]
    fn restore_buang_token_expired() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sesi.dat");

        let token = buat_token(9, "Dewi", "ADMIN", Utc::now().timestamp() + 1);
        let ciphertext = crate::encryption::encrypt(&token).unwrap();
        std::fs::write(&path, ciphertext).unwrap();

        // Tunggu sampai lewat exp
        std::thread::sleep(std::time::Duration::from_secs(2));

        let restored = TokenStore::restore(Some(path.clone()));
        assert!(restored.session().is_err());
        assert!(!path.exists());
    }
}
