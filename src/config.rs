//! Environment-based configuration module
//!
//! Konfigurasi dibaca dengan prioritas:
//! 1. Environment variables (tertinggi)
//! 2. File .env
//! 3. Nilai default (terendah)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::{env, fs};

/// Application environment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// Get environment from APP_ENV variable or default to Development
    pub fn from_env() -> Self {
        match env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()).as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Environment mode
    pub environment: Environment,

    /// Application name
    pub app_name: String,

    /// Application version
    pub version: String,

    /// REST backend configuration
    pub api: ApiConfig,

    /// Auth/session configuration
    pub auth: AuthConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Dashboard tuning
    pub dashboard: DashboardConfig,
}

/// REST backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL backend, tanpa trailing slash
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// Default page size untuk daftar paginated
    pub per_page: i64,
}

/// Auth/session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Nama file token terenkripsi di app data dir
    pub token_file: String,

    /// Simpan token ke disk agar sesi bertahan setelah restart
    pub persist_token: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,

    /// Log to file
    pub log_to_file: bool,

    /// Log to stdout
    pub log_to_stdout: bool,

    /// Use JSON format (true for production)
    pub json_format: bool,

    /// Maximum log file size in MB
    pub max_file_size_mb: u64,

    /// Maximum number of log files to keep
    pub max_log_files: u32,
}

/// Dashboard tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Batas stok dianggap menipis
    pub ambang_stok_menipis: i64,

    /// Jumlah entri per halaman pada activity feed
    pub feed_per_page: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::from_env();

        Self {
            environment: env,
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "Dashboard Niaga".to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),

            api: ApiConfig {
                base_url: env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:8080/api".to_string())
                    .trim_end_matches('/')
                    .to_string(),
                timeout_secs: env::var("API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(15),
                connect_timeout_secs: env::var("API_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
                per_page: env::var("API_PER_PAGE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(20),
            },

            auth: AuthConfig {
                token_file: env::var("TOKEN_FILE").unwrap_or_else(|_| "sesi.dat".to_string()),
                persist_token: env::var("PERSIST_TOKEN")
                    .map(|s| s != "false")
                    .unwrap_or(true),
            },

            logging: LoggingConfig {
                level: env::var("RUST_LOG").unwrap_or_else(|_| {
                    if env.is_production() { "warn".to_string() } else { "debug".to_string() }
                }),
                log_to_file: true,
                log_to_stdout: env::var("LOG_TO_STDOUT")
                    .map(|s| s == "true")
                    .unwrap_or(true),
                json_format: env.is_production(),
                max_file_size_mb: 10,
                max_log_files: 5,
            },

            dashboard: DashboardConfig {
                ambang_stok_menipis: env::var("AMBANG_STOK_MENIPIS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
                feed_per_page: env::var("FEED_PER_PAGE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(20),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and defaults
    pub fn load() -> Self {
        Self::default()
    }

    /// Load configuration from a .env file (if exists)
    pub fn load_from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        let content = fs::read_to_string(path).ok()?;

        // Simple .env parser (key=value format)
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');

                // Set environment variable (will be picked up by load())
                env::set_var(key, value);
            }
        }

        Some(Self::default())
    }

    /// Get the log directory path
    pub fn get_log_dir(&self, app_data_dir: &Path) -> PathBuf {
        app_data_dir.join("logs")
    }

    /// Path file token terenkripsi
    pub fn get_token_path(&self, app_data_dir: &Path) -> PathBuf {
        app_data_dir.join(&self.auth.token_file)
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    /// Validate configuration for production
    pub fn validate(&self) -> Result<(), String> {
        if self.is_production() {
            if self.api.base_url.starts_with("http://localhost") {
                eprintln!("⚠️  WARNING: API_BASE_URL masih menunjuk ke localhost di production!");
            }

            if self.api.base_url.starts_with("http://") {
                return Err(
                    "API_BASE_URL harus memakai https:// di production. \
                     Set via environment variable."
                        .to_string(),
                );
            }
        }

        Ok(())
    }
}

/// Global configuration instance
static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Initialize the global configuration
pub fn init_config() -> &'static AppConfig {
    GLOBAL_CONFIG.get_or_init(AppConfig::load)
}

/// Get the global configuration
pub fn get_config() -> &'static AppConfig {
    GLOBAL_CONFIG.get().expect("Configuration not initialized. Call init_config() first.")
}

/// Get the current environment
pub fn get_environment() -> Environment {
    Environment::from_env()
}
