// Server configuration
//
// Loaded from environment variables (a `.env` file is honored by main):
// - HOST: bind IP address (default: 0.0.0.0)
// - PORT: bind port (default: 7002)
// - DATABASE_URL: SQLite URL, or "memory" for the dev backend
//   (default: sqlite://database.db)
// - STATIC_DIR: page template + static assets (default: static)
// - CORS_ALLOWED_ORIGINS: comma-separated origins, CORS disabled when unset

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 7002;
const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub static_dir: PathBuf,
    pub cors_origins: Vec<HeaderValue>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (extracted for testing)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", raw))?,
            None => defaults.port,
        };

        // Unparseable origins are skipped rather than failing startup
        let cors_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|s| s.split(',').filter_map(|s| s.trim().parse().ok()).collect())
            .unwrap_or_default();

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            cors_origins,
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}
