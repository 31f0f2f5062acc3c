use super::{ApiClient, Sampul};
use crate::errors::AppError;
use crate::models::karyawan::{CreateKaryawanPayload, Karyawan, UpdateKaryawanPayload};

pub async fn list(api: &ApiClient, token: &str) -> Result<Vec<Karyawan>, AppError> {
    let sampul: Sampul<Vec<Karyawan>> = api.get(token, "/karyawan").await?;
    Ok(sampul.data)
}

pub async fn create(
    api: &ApiClient,
    token: &str,
    payload: &CreateKaryawanPayload,
) -> Result<Karyawan, AppError> {
    let sampul: Sampul<Karyawan> = api.post(token, "/karyawan", payload).await?;
    Ok(sampul.data)
}

pub async fn update(
    api: &ApiClient,
    token: &str,
    id: i64,
    payload: &UpdateKaryawanPayload,
) -> Result<Karyawan, AppError> {
    let sampul: Sampul<Karyawan> = api.put(token, &format!("/karyawan/{}", id), payload).await?;
    Ok(sampul.data)
}

pub async fn set_aktif(
    api: &ApiClient,
    token: &str,
    id: i64,
    aktif: bool,
) -> Result<Karyawan, AppError> {
    let sampul: Sampul<Karyawan> = api
        .put(
            token,
            &format!("/karyawan/{}/aktif", id),
            &serde_json::json!({ "aktif": aktif }),
        )
        .await?;
    Ok(sampul.data)
}
