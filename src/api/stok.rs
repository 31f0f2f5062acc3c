use super::{ApiClient, Sampul};
use crate::errors::AppError;
use crate::models::stok::{CreateStokMutasiPayload, StokMutasi};

/// Ledger mutasi stok. Tanpa `produk_id` backend mengembalikan seluruh
/// ledger, urutan kronologis.
pub async fn mutasi(
    api: &ApiClient,
    token: &str,
    produk_id: Option<i64>,
) -> Result<Vec<StokMutasi>, AppError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(p) = produk_id {
        query.push(("produk_id", p.to_string()));
    }

    let sampul: Sampul<Vec<StokMutasi>> = api.get_with_query(token, "/stok", &query).await?;
    Ok(sampul.data)
}

pub async fn create(
    api: &ApiClient,
    token: &str,
    payload: &CreateStokMutasiPayload,
) -> Result<StokMutasi, AppError> {
    let sampul: Sampul<StokMutasi> = api.post(token, "/stok", payload).await?;
    Ok(sampul.data)
}
