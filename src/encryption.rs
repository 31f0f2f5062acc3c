//! Enkripsi token sesi yang disimpan di disk.
//!
//! Token bearer dari backend dipersist agar sesi bertahan setelah restart.
//! Sebelum ditulis ke app data dir, token dienkripsi AES-256-GCM dengan
//! kunci yang diturunkan dari ENCRYPTION_KEY (env) atau machine id.

use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose, Engine as _};
use rand::RngCore;
use std::{env, fs};

/// Kunci 32 byte dari env atau machine id
fn get_encryption_key() -> [u8; 32] {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let seed = env::var("ENCRYPTION_KEY").unwrap_or_else(|_| get_machine_id());

    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let hash = hasher.finish();

    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&hash.to_le_bytes());
    for (i, &b) in seed.as_bytes().iter().take(24).enumerate() {
        key[8 + i] = b;
    }
    key
}

/// Get a machine-specific identifier
fn get_machine_id() -> String {
    // Linux: machine-id. Fallback ke hostname.
    if let Ok(id) = fs::read_to_string("/etc/machine-id") {
        return id.trim().to_string();
    }

    env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string())
}

/// Encrypt plaintext using AES-256-GCM
pub fn encrypt(plaintext: &str) -> Result<String, String> {
    let key = get_encryption_key();
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| format!("Gagal inisialisasi cipher: {}", e))?;

    // Nonce acak per enkripsi
    let mut nonce_bytes = [0u8; 12];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| format!("Enkripsi gagal: {}", e))?;

    // nonce + ciphertext digabung lalu di-base64
    let mut combined = nonce_bytes.to_vec();
    combined.extend_from_slice(&ciphertext);

    Ok(general_purpose::STANDARD.encode(&combined))
}

/// Decrypt ciphertext using AES-256-GCM
pub fn decrypt(ciphertext_b64: &str) -> Result<String, String> {
    let key = get_encryption_key();
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| format!("Gagal inisialisasi cipher: {}", e))?;

    let combined = general_purpose::STANDARD
        .decode(ciphertext_b64)
        .map_err(|e| format!("Base64 tidak valid: {}", e))?;

    if combined.len() < 12 {
        return Err("Format ciphertext tidak valid".to_string());
    }

    let nonce = Nonce::from_slice(&combined[..12]);
    let ciphertext = &combined[12..];

    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|e| format!("Dekripsi gagal: {}", e))?;

    String::from_utf8(plaintext).map_err(|e| format!("UTF-8 tidak valid: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt() {
        let original = "eyJhbGciOiJIUzI1NiJ9.payload.sig";
        let encrypted = encrypt(original).unwrap();
        let decrypted = decrypt(&encrypted).unwrap();
        assert_eq!(original, decrypted);
    }

    #[test]
    fn test_nonce_acak() {
        let s1 = encrypt("halo").unwrap();
        let s2 = encrypt("halo").unwrap();
        // Beda karena nonce acak
        assert_ne!(s1, s2);

        assert_eq!(decrypt(&s1).unwrap(), "halo");
        assert_eq!(decrypt(&s2).unwrap(), "halo");
    }

    #[test]
    fn test_ciphertext_rusak() {
        assert!(decrypt("bukan-base64!!").is_err());
        assert!(decrypt("AAAA").is_err());
    }
}
