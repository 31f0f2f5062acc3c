use super::{ApiClient, Sampul};
use crate::errors::AppError;
use crate::models::pelanggan::{CreatePelangganPayload, Pelanggan, UpdatePelangganPayload};

pub async fn list(api: &ApiClient, token: &str) -> Result<Vec<Pelanggan>, AppError> {
    let sampul: Sampul<Vec<Pelanggan>> = api.get(token, "/pelanggan").await?;
    Ok(sampul.data)
}

pub async fn create(
    api: &ApiClient,
    token: &str,
    payload: &CreatePelangganPayload,
) -> Result<Pelanggan, AppError> {
    let sampul: Sampul<Pelanggan> = api.post(token, "/pelanggan", payload).await?;
    Ok(sampul.data)
}

pub async fn update(
    api: &ApiClient,
    token: &str,
    id: i64,
    payload: &UpdatePelangganPayload,
) -> Result<Pelanggan, AppError> {
    let sampul: Sampul<Pelanggan> = api.put(token, &format!("/pelanggan/{}", id), payload).await?;
    Ok(sampul.data)
}

pub async fn delete(api: &ApiClient, token: &str, id: i64) -> Result<(), AppError> {
    api.delete(token, &format!("/pelanggan/{}", id)).await
}
