use super::{ApiClient, Sampul};
use crate::errors::AppError;
use crate::models::produk::Kategori;

pub async fn list(api: &ApiClient, token: &str) -> Result<Vec<Kategori>, AppError> {
    let sampul: Sampul<Vec<Kategori>> = api.get(token, "/kategori").await?;
    Ok(sampul.data)
}

pub async fn create(api: &ApiClient, token: &str, nama: &str) -> Result<Kategori, AppError> {
    let sampul: Sampul<Kategori> = api
        .post(token, "/kategori", &serde_json::json!({ "nama": nama }))
        .await?;
    Ok(sampul.data)
}
