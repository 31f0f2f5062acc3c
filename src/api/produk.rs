use super::{ApiClient, Sampul};
use crate::errors::AppError;
use crate::models::produk::{CreateProdukPayload, Produk, UpdateProdukPayload};

pub async fn list(api: &ApiClient, token: &str) -> Result<Vec<Produk>, AppError> {
    let sampul: Sampul<Vec<Produk>> = api.get(token, "/produk").await?;
    Ok(sampul.data)
}

pub async fn detail(api: &ApiClient, token: &str, id: i64) -> Result<Produk, AppError> {
    let sampul: Sampul<Produk> = api.get(token, &format!("/produk/{}", id)).await?;
    Ok(sampul.data)
}

pub async fn create(
    api: &ApiClient,
    token: &str,
    payload: &CreateProdukPayload,
) -> Result<Produk, AppError> {
    let sampul: Sampul<Produk> = api.post(token, "/produk", payload).await?;
    Ok(sampul.data)
}

pub async fn update(
    api: &ApiClient,
    token: &str,
    id: i64,
    payload: &UpdateProdukPayload,
) -> Result<Produk, AppError> {
    let sampul: Sampul<Produk> = api.put(token, &format!("/produk/{}", id), payload).await?;
    Ok(sampul.data)
}

/// Soft delete: backend menandai produk nonaktif.
pub async fn delete(api: &ApiClient, token: &str, id: i64) -> Result<(), AppError> {
    api.delete(token, &format!("/produk/{}", id)).await
}
