use std::path::PathBuf;

use ebuilder_core::layout::DEFAULT_LAYOUT_PATH;
use ebuilder_core::storage::DEFAULT_UPLOAD_DIR;

/// Which template store the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL via `DATABASE_URL`.
    Postgres,
    /// Process-local store; contents are lost on restart.
    Memory,
}

impl StoreBackend {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            "memory" | "mem" => Some(Self::Memory),
            _ => None,
        }
    }
}

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
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Template store backend (default: `postgres`).
    pub store_backend: StoreBackend,
    /// Document store connection string.
    pub database_url: Option<String>,
    /// Directory uploaded images are written to and served from.
    pub upload_dir: PathBuf,
    /// Path of the HTML layout containing the placeholders.
    pub layout_path: PathBuf,
    /// Request body limit for image uploads, in bytes.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `*`                        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORE_BACKEND`        | `postgres`                 |
    /// | `DATABASE_URL`         | (none)                     |
    /// | `UPLOAD_DIR`           | `uploads`                  |
    /// | `LAYOUT_PATH`          | `templates/layout.html`    |
    /// | `MAX_UPLOAD_BYTES`     | `26214400` (25 MiB)        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let store_backend = std::env::var("STORE_BACKEND")
            .map(|raw| {
                StoreBackend::parse(&raw)
                    .unwrap_or_else(|| panic!("Unknown STORE_BACKEND '{raw}'"))
            })
            .unwrap_or(StoreBackend::Postgres);

        let database_url = std::env::var("DATABASE_URL").ok();

        let upload_dir = std::env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.into())
            .into();

        let layout_path = std::env::var("LAYOUT_PATH")
            .unwrap_or_else(|_| DEFAULT_LAYOUT_PATH.into())
            .into();

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "26214400".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store_backend,
            database_url,
            upload_dir,
            layout_path,
            max_upload_bytes,
        }
    }

    /// Whether any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}
