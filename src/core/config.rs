//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, output paths and reload ports come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables instead.

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public address the site is reachable at (behind a proxy, CDN, etc.)
    /// Example: https://queryio.dev
    pub public_url: Option<String>,

    /// `tracing` filter directive
    /// Example: info,queryio=debug
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            public_url: non_empty_var("PUBLIC_URL"),
            log_filter: non_empty_var("RUST_LOG"),
        }
    }

    /// Check if a public URL is configured
    pub fn has_public_url(&self) -> bool {
        self.public_url.is_some()
    }

    /// Log filter, falling back to [`DEFAULT_LOG_FILTER`]
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Address to advertise in logs: the public URL if set, else `http://{site_addr}`
    pub fn advertised_url(&self, site_addr: &str) -> String {
        match &self.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}", site_addr),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
