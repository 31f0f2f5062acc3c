//! Klien REST ke backend.
//!
//! Satu `reqwest::Client` dipakai bersama seluruh wrapper resource.
//! Semua request membawa header `Authorization: Bearer` dan `X-Request-Id`
//! untuk korelasi log dengan backend.

pub mod auth;
pub mod karyawan;
pub mod kategori;
pub mod pelanggan;
pub mod pembayaran;
pub mod pengiriman;
pub mod produk;
pub mod stok;
pub mod transaksi;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::errors::AppError;

/// Sampul respons sukses backend: `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct Sampul<T> {
    pub data: T,
}

/// Respons paginated backend: `{ "data": [...], "total": n, ... }`.
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// Body error dari backend. Backend lama memakai `message`,
/// yang baru memakai `pesan`; keduanya diterima.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    pesan: Option<String>,
    message: Option<String>,
}

pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Bangun klien dengan timeout dari konfigurasi (sekali saat startup).
    pub fn new(config: &ApiConfig) -> Result<Self, String> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| format!("Gagal membuat HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, token: &str, path: &str) -> Result<T, AppError> {
        let resp = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let resp = self
            .http
            .get(self.url(path))
            .query(query)
            .bearer_auth(token)
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let resp = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .json(body)
            .send()
            .await?;
        read_json(resp).await
    }

    /// POST tanpa bearer, hanya untuk endpoint login.
    pub async fn post_tanpa_auth<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let resp = self
            .http
            .post(self.url(path))
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .json(body)
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let resp = self
            .http
            .put(self.url(path))
            .bearer_auth(token)
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .json(body)
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn delete(&self, token: &str, path: &str) -> Result<(), AppError> {
        let resp = self
            .http
            .delete(self.url(path))
            .bearer_auth(token)
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        Err(status_error(status, baca_pesan(resp).await))
    }
}

/// Baca body sukses sebagai JSON, atau petakan status error ke AppError.
async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, AppError> {
    let status = resp.status();
    if status.is_success() {
        return resp.json::<T>().await.map_err(AppError::from);
    }
    Err(status_error(status, baca_pesan(resp).await))
}

async fn baca_pesan(resp: Response) -> Option<String> {
    resp.json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.pesan.or(b.message))
}

fn status_error(status: StatusCode, pesan: Option<String>) -> AppError {
    let pesan = pesan.unwrap_or_else(|| "tanpa keterangan".to_string());
    match status.as_u16() {
        401 => AppError::Auth(pesan),
        403 => AppError::Forbidden(pesan),
        404 => AppError::NotFound(pesan),
        s => AppError::Api { status: s, pesan },
    }
}

/// Sanitize error untuk frontend: detail internal (URL backend, pesan
/// reqwest) masuk log, user mendapat pesan yang bisa ditindaklanjuti.
pub fn sanitize_error(err: AppError, context: &str) -> String {
    match err {
        AppError::Http(e) => {
            crate::log_error!("API", context, e.to_string());
            if e.is_timeout() {
                "Koneksi ke server timeout. Periksa koneksi internet Anda.".to_string()
            } else if e.is_connect() {
                "Tidak dapat terhubung ke server. Coba beberapa saat lagi.".to_string()
            } else if e.is_decode() {
                "Respons server tidak dikenali. Hubungi administrator.".to_string()
            } else {
                "Gagal menghubungi server. Silakan coba lagi.".to_string()
            }
        }
        AppError::Api { status, pesan } => {
            crate::log_error!("API", context, format!("HTTP {}: {}", status, pesan));
            if status >= 500 {
                "Server sedang bermasalah. Silakan coba lagi nanti.".to_string()
            } else {
                pesan
            }
        }
        lain => lain.to_string(),
    }
}
