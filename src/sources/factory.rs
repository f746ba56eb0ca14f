use log::info;
use std::sync::Arc;
use std::time::Duration;

use super::{ApiSource, DocumentLocation, MemorySource, RecipeSource, RetrySource, StaticSource};
use crate::config::{AppConfig, SourceMode};
use crate::error::Result;

/// Factory for creating recipe sources from configuration
pub struct SourceFactory;

impl SourceFactory {
    /// Create the configured source, wrapped in retries when more than one
    /// attempt is configured
    pub fn from_config(config: &AppConfig) -> Result<Arc<dyn RecipeSource>> {
        let timeout = Some(Duration::from_secs(config.source.timeout));

        let source: Arc<dyn RecipeSource> = match config.source.mode {
            SourceMode::Api => Arc::new(ApiSource::new(&config.source.base_url, timeout)?),
            SourceMode::Static => Arc::new(StaticSource::new(
                DocumentLocation::parse(&config.source.static_url),
                timeout,
            )?),
            SourceMode::Mock => Arc::new(MemorySource::samples()),
        };

        info!("Using '{}' recipe source", source.name());

        if config.source.mode != SourceMode::Mock && config.retry.attempts > 1 {
            Ok(Arc::new(RetrySource::from_config(source, &config.retry)))
        } else {
            Ok(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_api_source() {
        let source = SourceFactory::from_config(&AppConfig::default()).unwrap();
        assert_eq!(source.name(), "api");
    }

    #[test]
    fn test_mock_mode() {
        let mut config = AppConfig::default();
        config.source.mode = SourceMode::Mock;
        let source = SourceFactory::from_config(&config).unwrap();
        assert_eq!(source.name(), "mock");
    }

    #[test]
    fn test_static_mode() {
        let mut config = AppConfig::default();
        config.source.mode = SourceMode::Static;
        config.retry.attempts = 1;
        let source = SourceFactory::from_config(&config).unwrap();
        assert_eq!(source.name(), "static");
    }

    #[test]
    fn test_bad_base_url_is_rejected() {
        let mut config = AppConfig::default();
        config.source.base_url = "localhost without scheme".to_string();
        assert!(SourceFactory::from_config(&config).is_err());
    }
}
