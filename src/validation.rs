//! Validasi input terpusat.
//!
//! Payload divalidasi di sisi klien sebelum dikirim supaya user mendapat
//! pesan cepat; backend tetap memvalidasi ulang.

/// Validation result type
pub type ValidationResult = Result<(), String>;

/// Validate a full name
/// - Length: 2-100 characters
/// - Allowed: letters, spaces, basic punctuation
pub fn validate_nama(nama: &str) -> ValidationResult {
    let trimmed = nama.trim();

    if trimmed.is_empty() {
        return Err("Nama tidak boleh kosong".into());
    }

    if trimmed.len() < 2 || trimmed.len() > 100 {
        return Err("Nama harus 2-100 karakter".into());
    }

    if !trimmed.chars().all(|c| c.is_alphabetic() || c.is_whitespace() || ".-'".contains(c)) {
        return Err("Nama hanya boleh berisi huruf, spasi, dan karakter .-'".into());
    }

    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let trimmed = email.trim();

    if trimmed.is_empty() {
        return Err("Email tidak boleh kosong".into());
    }

    if trimmed.len() > 254 {
        return Err("Email terlalu panjang (max 254 karakter)".into());
    }

    let parts: Vec<&str> = trimmed.split('@').collect();
    if parts.len() != 2 {
        return Err("Format email tidak valid".into());
    }

    let (local, domain) = (parts[0], parts[1]);

    if local.is_empty() || local.len() > 64 {
        return Err("Bagian lokal email tidak valid".into());
    }

    if !domain.contains('.') {
        return Err("Domain email tidak valid".into());
    }

    Ok(())
}

/// Validate phone number (Indonesian format)
pub fn validate_no_hp(no_hp: &str) -> ValidationResult {
    let trimmed = no_hp.trim();

    if trimmed.is_empty() {
        return Err("Nomor telepon tidak boleh kosong".into());
    }

    let digits: String = trimmed.chars().filter(|c| c.is_numeric()).collect();

    // Nomor Indonesia: 8-15 digit
    if digits.len() < 8 || digits.len() > 15 {
        return Err("Nomor telepon harus 8-15 digit".into());
    }

    Ok(())
}

/// Validate monetary amount
pub fn validate_harga(harga: f64, min: Option<f64>, max: Option<f64>) -> ValidationResult {
    if harga.is_nan() || harga.is_infinite() {
        return Err("Jumlah tidak valid".into());
    }

    let min_val = min.unwrap_or(0.0);
    let max_val = max.unwrap_or(1_000_000_000.0);

    if harga < min_val {
        return Err(format!("Jumlah minimal Rp {:.0}", min_val));
    }

    if harga > max_val {
        return Err(format!("Jumlah maksimal Rp {:.0}", max_val));
    }

    Ok(())
}

/// Validate quantity
pub fn validate_jumlah(jumlah: i64, min: Option<i64>, max: Option<i64>) -> ValidationResult {
    if jumlah < 0 {
        return Err("Jumlah tidak boleh negatif".into());
    }

    let min_val = min.unwrap_or(0);
    let max_val = max.unwrap_or(1_000_000);

    if jumlah < min_val {
        return Err(format!("Jumlah minimal {}", min_val));
    }

    if jumlah > max_val {
        return Err(format!("Jumlah maksimal {}", max_val));
    }

    Ok(())
}

/// Validate product name
pub fn validate_nama_produk(nama: &str) -> ValidationResult {
    let trimmed = nama.trim();

    if trimmed.is_empty() {
        return Err("Nama produk tidak boleh kosong".into());
    }

    if trimmed.len() < 2 || trimmed.len() > 200 {
        return Err("Nama produk harus 2-200 karakter".into());
    }

    Ok(())
}

/// Validate SKU (Stock Keeping Unit)
pub fn validate_sku(sku: &str) -> ValidationResult {
    if sku.is_empty() {
        return Ok(()); // SKU opsional
    }

    let trimmed = sku.trim();

    if trimmed.len() > 50 {
        return Err("SKU maksimal 50 karakter".into());
    }

    if !trimmed.chars().all(|c| c.is_alphanumeric() || "-_.".contains(c)) {
        return Err("SKU hanya boleh berisi huruf, angka, dan karakter -_.".into());
    }

    Ok(())
}

/// Validate keterangan/catatan bebas
pub fn validate_keterangan(keterangan: &str) -> ValidationResult {
    if keterangan.is_empty() {
        return Ok(()); // opsional
    }

    if keterangan.len() > 500 {
        return Err("Catatan terlalu panjang (max 500 karakter)".into());
    }

    Ok(())
}

/// Validasi gabungan payload produk (create & update memakai field sama).
pub fn validate_payload_produk(
    nama: &str,
    sku: Option<&str>,
    harga_jual: f64,
    harga_beli: f64,
) -> ValidationResult {
    validate_nama_produk(nama)?;
    validate_harga(harga_jual, Some(0.0), None)?;
    validate_harga(harga_beli, Some(0.0), None)?;

    if harga_jual < harga_beli {
        return Err("Harga jual tidak boleh di bawah harga beli".into());
    }

    if let Some(s) = sku {
        validate_sku(s)?;
    }

    Ok(())
}

/// Validasi gabungan payload pelanggan.
pub fn validate_payload_pelanggan(
    nama: &str,
    email: Option<&str>,
    no_hp: Option<&str>,
) -> ValidationResult {
    validate_nama(nama)?;

    if let Some(e) = email {
        if !e.is_empty() {
            validate_email(e)?;
        }
    }

    if let Some(hp) = no_hp {
        if !hp.is_empty() {
            validate_no_hp(hp)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nama_valid_dan_tidak() {
        assert!(validate_nama("Budi Santoso").is_ok());
        assert!(validate_nama("O'Connor-Putra").is_ok());
        assert!(validate_nama("").is_err());
        assert!(validate_nama("X").is_err());
        assert!(validate_nama("Budi<script>").is_err());
    }

    #[test]
    fn email_valid_dan_tidak() {
        assert!(validate_email("budi@toko.co.id").is_ok());
        assert!(validate_email("tanpa-at").is_err());
        assert!(validate_email("dua@@at.com").is_err());
        assert!(validate_email("a@tanpatitik").is_err());
    }

    #[test]
    fn no_hp_indonesia() {
        assert!(validate_no_hp("081234567890").is_ok());
        assert!(validate_no_hp("+62 812-3456-7890").is_ok());
        assert!(validate_no_hp("12345").is_err());
        assert!(validate_no_hp("").is_err());
    }

    #[test]
    fn harga_batas() {
        assert!(validate_harga(10_000.0, None, None).is_ok());
        assert!(validate_harga(-1.0, None, None).is_err());
        assert!(validate_harga(f64::NAN, None, None).is_err());
        assert!(validate_harga(2_000_000_000.0, None, None).is_err());
    }

    #[test]
    fn payload_produk_margin() {
        assert!(validate_payload_produk("Kopi Arabika", None, 12_000.0, 9_000.0).is_ok());
        assert!(validate_payload_produk("Kopi Arabika", None, 8_000.0, 9_000.0).is_err());
        assert!(validate_payload_produk("K", None, 12_000.0, 9_000.0).is_err());
        assert!(validate_payload_produk("Kopi", Some("SKU 01!"), 12_000.0, 9_000.0).is_err());
    }

    #[test]
    fn payload_pelanggan_kontak_opsional() {
        assert!(validate_payload_pelanggan("Siti Rahayu", None, None).is_ok());
        assert!(validate_payload_pelanggan("Siti Rahayu", Some(""), Some("")).is_ok());
        assert!(validate_payload_pelanggan("Siti Rahayu", Some("salah"), None).is_err());
        assert!(validate_payload_pelanggan("Siti Rahayu", None, Some("123")).is_err());
    }
}
