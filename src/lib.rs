pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod encryption;
pub mod errors;
pub mod feed;
pub mod laporan;
pub mod ledger;
pub mod logger;
pub mod models;
pub mod rate_limiter;
pub mod validation;

use auth::token::TokenStore;
use std::sync::Mutex;
use tauri::Manager;

/// State global aplikasi — di-manage oleh Tauri.
pub struct AppState {
    pub api: api::ApiClient,
    pub auth: Mutex<TokenStore>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Dapatkan path AppData
            let app_data_dir = app
                .path()
                .app_data_dir()
                .expect("Gagal mendapatkan path AppData");
            std::fs::create_dir_all(&app_data_dir).expect("Gagal membuat direktori AppData");

            // Initialize configuration
            let config = config::init_config();
            if let Err(e) = config.validate() {
                eprintln!("⚠️  Warning: Konfigurasi tidak valid: {}", e);
            }

            // Initialize logger
            if let Err(e) = logger::init_global_logger(&app_data_dir) {
                eprintln!("⚠️  Warning: Failed to initialize logger: {}", e);
            }

            // Log application startup
            log_info!("APP", "Application starting", serde_json::json!({
                "version": env!("CARGO_PKG_VERSION"),
                "environment": config.environment.as_str(),
                "api_base_url": config.api.base_url
            }));

            // HTTP client dibangun sekali, dipakai semua command
            let api = api::ApiClient::new(&config.api).expect("Gagal inisialisasi HTTP client");

            // Pulihkan sesi tersimpan (kalau ada dan belum expired)
            let token_path = config
                .auth
                .persist_token
                .then(|| config.get_token_path(&app_data_dir));
            let store = TokenStore::restore(token_path);

            if let Some(claims) = store.claims() {
                log_info!("AUTH", "Sesi tersimpan dipulihkan", serde_json::json!({
                    "karyawan_id": claims.sub,
                    "role": claims.role
                }));
            }

            app.manage(AppState {
                api,
                auth: Mutex::new(store),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Auth
            commands::auth_cmd::login,
            commands::auth_cmd::logout,
            commands::auth_cmd::restore_session,
            commands::auth_cmd::check_session,
            // Produk & Kategori
            commands::produk_cmd::get_produk,
            commands::produk_cmd::get_produk_detail,
            commands::produk_cmd::create_produk,
            commands::produk_cmd::update_produk,
            commands::produk_cmd::delete_produk,
            commands::produk_cmd::get_kategori,
            commands::produk_cmd::create_kategori,
            // Pelanggan
            commands::pelanggan_cmd::get_pelanggan,
            commands::pelanggan_cmd::create_pelanggan,
            commands::pelanggan_cmd::update_pelanggan,
            commands::pelanggan_cmd::delete_pelanggan,
            // Transaksi
            commands::transaksi_cmd::get_transaksi,
            commands::transaksi_cmd::get_transaksi_detail,
            commands::transaksi_cmd::create_transaksi,
            commands::transaksi_cmd::update_status_transaksi,
            // Pembayaran
            commands::pembayaran_cmd::get_pembayaran,
            commands::pembayaran_cmd::create_pembayaran,
            commands::pembayaran_cmd::check_status_pembayaran,
            // Pengiriman
            commands::pengiriman_cmd::get_pengiriman,
            commands::pengiriman_cmd::create_pengiriman,
            commands::pengiriman_cmd::update_status_pengiriman,
            // Stok
            commands::stok_cmd::get_saldo_stok,
            commands::stok_cmd::get_riwayat_stok,
            commands::stok_cmd::create_stok_mutasi,
            // Karyawan
            commands::karyawan_cmd::get_karyawan,
            commands::karyawan_cmd::create_karyawan,
            commands::karyawan_cmd::update_karyawan,
            commands::karyawan_cmd::toggle_status_karyawan,
            // Dashboard & Laporan
            commands::dashboard_cmd::get_statistik_dashboard,
            commands::dashboard_cmd::get_activity_feed,
            commands::dashboard_cmd::get_grafik_penjualan,
            commands::dashboard_cmd::get_produk_terlaris,
            commands::dashboard_cmd::ekspor_laporan_csv,
        ])
        .run(tauri::generate_context!())
        .expect("Gagal menjalankan aplikasi");
}
