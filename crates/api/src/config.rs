use std::str::FromStr;

use printshop_core::estimation::{
    EstimationParams, DENSITY_G_PER_MM3, ELITE_SPEED_MM3_PER_SEC, QUALITY_SPEED_MM3_PER_SEC,
    STANDARD_SPEED_MM3_PER_SEC,
};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on post-shutdown cleanup in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Density and profile speeds used by the estimation engine.
    pub estimation: EstimationParams,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS`   | `30`                    |
    /// | `PRINT_DENSITY_G_PER_MM3` | `0.00124`               |
    /// | `PRINT_SPEED_STANDARD`    | `8.0`                   |
    /// | `PRINT_SPEED_QUALITY`     | `5.0`                   |
    /// | `PRINT_SPEED_ELITE`       | `3.5`                   |
    ///
    /// Panics on unparseable values or non-positive estimation parameters;
    /// misconfiguration should stop the server at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = env_or("PORT", 3000);

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", 30);
        let shutdown_timeout_secs: u64 = env_or("SHUTDOWN_TIMEOUT_SECS", 30);

        let estimation = EstimationParams {
            density_g_per_mm3: env_or("PRINT_DENSITY_G_PER_MM3", DENSITY_G_PER_MM3),
            standard_speed: env_or("PRINT_SPEED_STANDARD", STANDARD_SPEED_MM3_PER_SEC),
            quality_speed: env_or("PRINT_SPEED_QUALITY", QUALITY_SPEED_MM3_PER_SEC),
            elite_speed: env_or("PRINT_SPEED_ELITE", ELITE_SPEED_MM3_PER_SEC),
        };
        if let Err(e) = estimation.validate() {
            panic!("Invalid estimation configuration: {e}");
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            estimation,
        }
    }
}

/// Read `key` and parse it, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}
