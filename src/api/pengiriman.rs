use super::{ApiClient, Sampul};
use crate::errors::AppError;
use crate::models::pengiriman::{CreatePengirimanPayload, Pengiriman};

pub async fn list(
    api: &ApiClient,
    token: &str,
    driver_id: Option<i64>,
) -> Result<Vec<Pengiriman>, AppError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(d) = driver_id {
        query.push(("driver_id", d.to_string()));
    }

    let sampul: Sampul<Vec<Pengiriman>> =
        api.get_with_query(token, "/pengiriman", &query).await?;
    Ok(sampul.data)
}

pub async fn create(
    api: &ApiClient,
    token: &str,
    payload: &CreatePengirimanPayload,
) -> Result<Pengiriman, AppError> {
    let sampul: Sampul<Pengiriman> = api.post(token, "/pengiriman", payload).await?;
    Ok(sampul.data)
}

pub async fn update_status(
    api: &ApiClient,
    token: &str,
    id: i64,
    status: &str,
) -> Result<Pengiriman, AppError> {
    let sampul: Sampul<Pengiriman> = api
        .put(
            token,
            &format!("/pengiriman/{}/status", id),
            &serde_json::json!({ "status": status }),
        )
        .await?;
    Ok(sampul.data)
}
