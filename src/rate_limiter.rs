use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// Entry untuk rate limiting
#[derive(Clone, Debug)]
struct RateLimitEntry {
    count: u32,
    window_start: DateTime<Utc>,
}

/// Rate limiter dengan sliding window per karyawan.
/// Menahan halaman yang melakukan polling/refresh terlalu agresif ke backend.
pub struct RateLimiter {
    /// Map: karyawan_id -> (action -> RateLimitEntry)
    entries: Mutex<HashMap<i64, HashMap<String, RateLimitEntry>>>,
    /// Max requests per window
    max_requests: u32,
    /// Window duration in seconds
    window_seconds: i64,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window_seconds: i64) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_requests,
            window_seconds,
        }
    }

    /// Check if action is rate limited for user
    /// Returns Ok(()) if allowed, Err(message) if rate limited
    pub fn check(&self, karyawan_id: i64, action: &str) -> Result<(), String> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| "Failed to acquire rate limiter lock")?;

        let now = Utc::now();
        let window_duration = Duration::seconds(self.window_seconds);

        let user_entries = entries.entry(karyawan_id).or_insert_with(HashMap::new);

        let entry = user_entries
            .entry(action.to_string())
            .or_insert_with(|| RateLimitEntry {
                count: 0,
                window_start: now,
            });

        // Window lama direset
        if now >= entry.window_start + window_duration {
            entry.count = 0;
            entry.window_start = now;
        }

        entry.count += 1;

        if entry.count > self.max_requests {
            let retry_after = (entry.window_start + window_duration - now).num_seconds();
            return Err(format!(
                "Terlalu sering. Maksimal {} request per {} detik. Coba lagi dalam {} detik.",
                self.max_requests,
                self.window_seconds,
                retry_after.max(0)
            ));
        }

        Ok(())
    }
}

// Batas default untuk aksi yang rawan polling
lazy_static::lazy_static! {
    /// Polling status pembayaran: 30 request per menit (UI poll tiap 3 detik)
    pub static ref STATUS_PEMBAYARAN_LIMIT: RateLimiter = RateLimiter::new(30, 60);

    /// Refresh activity feed: 20 request per menit
    pub static ref FEED_LIMIT: RateLimiter = RateLimiter::new(20, 60);

    /// Refresh statistik dashboard: 20 request per menit
    pub static ref DASHBOARD_LIMIT: RateLimiter = RateLimiter::new(20, 60);

    /// Ekspor laporan: 5 request per menit
    pub static ref EKSPOR_LIMIT: RateLimiter = RateLimiter::new(5, 60);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lolos_di_bawah_batas() {
        let limiter = RateLimiter::new(3, 60);
        for _ in 0..3 {
            assert!(limiter.check(1, "refresh").is_ok());
        }
        assert!(limiter.check(1, "refresh").is_err());
    }

    #[test]
    fn batas_per_user_dan_aksi() {
        let limiter = RateLimiter::new(1, 60);
        assert!(limiter.check(1, "refresh").is_ok());
        assert!(limiter.check(1, "refresh").is_err());

        // User lain dan aksi lain tidak terpengaruh
        assert!(limiter.check(2, "refresh").is_ok());
        assert!(limiter.check(1, "ekspor").is_ok());
    }
}
