use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Where recipe data comes from
    #[serde(default)]
    pub source: SourceConfig,
    /// Retry behavior for failed list fetches
    #[serde(default)]
    pub retry: RetryConfig,
    /// Search history persistence
    #[serde(default)]
    pub history: HistoryConfig,
    /// Listing and pagination
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Which backend serves recipes
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Local recipe endpoint with server-side filtering
    #[default]
    Api,
    /// A static JSON document filtered client-side
    Static,
    /// Built-in sample recipes
    Mock,
}

/// Configuration for the recipe data source
#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    #[serde(default)]
    pub mode: SourceMode,
    /// Base URL of the recipe endpoint (api mode)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// URL or file path of the recipe document (static mode)
    #[serde(default = "default_static_url")]
    pub static_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::default(),
            base_url: default_base_url(),
            static_url: default_static_url(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for retrying failed fetches
#[derive(Debug, Deserialize, Clone)]
pub struct RetryConfig {
    /// Total number of tries, including the first one
    #[serde(default = "default_retry_attempts")]
    pub attempts: u32,
    /// Base delay between tries in milliseconds (grows linearly)
    #[serde(default = "default_retry_delay_ms")]
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            attempts: default_retry_attempts(),
            delay_ms: default_retry_delay_ms(),
        }
    }
}

/// Configuration for the search history cache
#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    /// Maximum number of remembered queries
    #[serde(default = "default_history_limit")]
    pub limit: usize,
    /// Directory holding the persisted history (platform data dir if unset)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: default_history_limit(),
            dir: None,
        }
    }
}

impl HistoryConfig {
    /// Resolve the history directory, falling back to the platform data dir
    pub fn resolve_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("recipe-browser")
        })
    }
}

/// Configuration for catalog listings
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Recipes per category page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:3002".to_string()
}

fn default_static_url() -> String {
    "recipes.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_history_limit() -> usize {
    crate::history::DEFAULT_LIMIT
}

fn default_page_size() -> usize {
    crate::catalog::DEFAULT_PAGE_SIZE
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. recipes.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__SOURCE__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config_from("recipes")
    }
}

/// Load configuration from the named file (without extension) and the environment
pub fn load_config_from(name: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(name).required(false))
        // Use double underscore for nested: RECIPES__SOURCE__MODE
        .add_source(
            Environment::with_prefix("RECIPES")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
