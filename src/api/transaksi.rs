use super::{ApiClient, Paginated, Sampul};
use crate::errors::AppError;
use crate::models::transaksi::{CreateTransaksiPayload, Transaksi};

/// Daftar transaksi paginated. `kasir_id` membatasi ke transaksi milik
/// satu kasir (dipakai untuk role KASIR), `tanggal` format YYYY-MM-DD.
pub async fn list(
    api: &ApiClient,
    token: &str,
    page: i64,
    per_page: i64,
    tanggal: Option<&str>,
    kasir_id: Option<i64>,
) -> Result<Paginated<Transaksi>, AppError> {
    let mut query: Vec<(&str, String)> = vec![
        ("page", page.to_string()),
        ("per_page", per_page.to_string()),
    ];
    if let Some(t) = tanggal {
        query.push(("tanggal", t.to_string()));
    }
    if let Some(k) = kasir_id {
        query.push(("kasir_id", k.to_string()));
    }

    api.get_with_query(token, "/transaksi", &query).await
}

pub async fn detail(api: &ApiClient, token: &str, id: &str) -> Result<Transaksi, AppError> {
    let sampul: Sampul<Transaksi> = api.get(token, &format!("/transaksi/{}", id)).await?;
    Ok(sampul.data)
}

pub async fn create(
    api: &ApiClient,
    token: &str,
    payload: &CreateTransaksiPayload,
) -> Result<Transaksi, AppError> {
    let sampul: Sampul<Transaksi> = api.post(token, "/transaksi", payload).await?;
    Ok(sampul.data)
}

pub async fn update_status(
    api: &ApiClient,
    token: &str,
    id: &str,
    status: &str,
) -> Result<Transaksi, AppError> {
    let sampul: Sampul<Transaksi> = api
        .put(
            token,
            &format!("/transaksi/{}/status", id),
            &serde_json::json!({ "status": status }),
        )
        .await?;
    Ok(sampul.data)
}
