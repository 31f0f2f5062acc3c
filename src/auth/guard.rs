use super::token::SesiAktif;
use crate::AppState;

/// Helper: validasi sesi dari AppState dan kembalikan SesiAktif clone.
///
/// Ini mirror check untuk UX. Backend tetap memvalidasi token pada
/// setiap request.
pub fn validate_session(state: &AppState) -> Result<SesiAktif, String> {
    let store = state.auth.lock().map_err(|e| e.to_string())?;
    store.session()
}

/// Helper: validasi sesi + pastikan role ADMIN.
pub fn validate_admin(state: &AppState) -> Result<SesiAktif, String> {
    let sesi = validate_session(state)?;
    if !sesi.claims.is_admin() {
        return Err("Akses ditolak: hanya Admin yang bisa melakukan ini".into());
    }
    Ok(sesi)
}

/// Helper: validasi sesi + pastikan role termasuk salah satu dari `roles`.
pub fn require_role(state: &AppState, roles: &[&str]) -> Result<SesiAktif, String> {
    let sesi = validate_session(state)?;
    if !roles.contains(&sesi.claims.role.as_str()) {
        return Err(format!(
            "Akses ditolak: halaman ini untuk role {}",
            roles.join("/")
        ));
    }
    Ok(sesi)
}
