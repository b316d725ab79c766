//! Configuration management

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::app::site::SiteInfo;
use crate::menu::layout::DEFAULT_BREAKPOINT_PX;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_GRAPHQL_URL: &str = "http://localhost:4000/graphql";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_SITE_NAME: &str = "spsa.church";

/// Directory name under the platform config dir
const APP_DIR_NAME: &str = "spsa-site";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Content backend endpoint
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,

    /// How long fetched content is served from memory. 0 disables the cache.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default = "default_breakpoint_px")]
    pub breakpoint_px: u32,

    /// Width assumed for server rendering; unset renders the narrow layout
    #[serde(default)]
    pub default_viewport_px: Option<u32>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_graphql_url() -> String {
    DEFAULT_GRAPHQL_URL.to_string()
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

fn default_breakpoint_px() -> u32 {
    DEFAULT_BREAKPOINT_PX
}

impl Config {
    pub fn graphql_endpoint(&self) -> Result<Url> {
        Url::parse(&self.graphql_url)
            .with_context(|| format!("invalid graphql_url: {}", self.graphql_url))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl From<&Config> for SiteInfo {
    fn from(config: &Config) -> Self {
        SiteInfo {
            name: config.site_name.clone(),
            breakpoint_px: config.breakpoint_px,
        }
    }
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SITE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", DEFAULT_PORT as i64)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (SITE_PORT, SITE_GRAPHQL_URL, etc.)
        .add_source(
            ::config::Environment::with_prefix("SITE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Explicit precedence: SITE_PORT > PORT > config > default
    if let Ok(port) = std::env::var("SITE_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        // Hosting platforms set PORT
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config: Config = builder.build()?.try_deserialize()?;
    config.graphql_endpoint()?;

    Ok(config)
}
