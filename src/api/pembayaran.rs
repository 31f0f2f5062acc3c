use super::{ApiClient, Sampul};
use crate::errors::AppError;
use crate::models::pembayaran::{CreatePembayaranPayload, Pembayaran};

pub async fn list(
    api: &ApiClient,
    token: &str,
    status: Option<&str>,
    transaksi_id: Option<&str>,
) -> Result<Vec<Pembayaran>, AppError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(s) = status {
        query.push(("status", s.to_string()));
    }
    if let Some(t) = transaksi_id {
        query.push(("transaksi_id", t.to_string()));
    }

    let sampul: Sampul<Vec<Pembayaran>> =
        api.get_with_query(token, "/pembayaran", &query).await?;
    Ok(sampul.data)
}

pub async fn create(
    api: &ApiClient,
    token: &str,
    payload: &CreatePembayaranPayload,
) -> Result<Pembayaran, AppError> {
    let sampul: Sampul<Pembayaran> = api.post(token, "/pembayaran", payload).await?;
    Ok(sampul.data)
}

/// Ambil satu pembayaran. Dipakai polling status dari halaman kasir.
pub async fn detail(api: &ApiClient, token: &str, id: i64) -> Result<Pembayaran, AppError> {
    let sampul: Sampul<Pembayaran> = api.get(token, &format!("/pembayaran/{}", id)).await?;
    Ok(sampul.data)
}
