use thiserror::Error;

/// Errors that can occur while browsing the recipe catalog
#[derive(Error, Debug)]
pub enum BrowseError {
    /// Failed to reach the recipe endpoint
    #[error("Failed to fetch recipes: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("HTTP error! status: {status} ({url})")]
    Status { url: String, status: u16 },

    /// The recipe document could not be decoded
    #[error("Failed to decode recipe data: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading or writing the local store failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BrowseError {
    /// Whether the error came from the network side (worth retrying)
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            BrowseError::Fetch(_) | BrowseError::Status { .. } | BrowseError::Decode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BrowseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_matches_fetch_wording() {
        let err = BrowseError::Status {
            url: "http://localhost:3002/recipes".to_string(),
            status: 500,
        };
        assert_eq!(
            err.to_string(),
            "HTTP error! status: 500 (http://localhost:3002/recipes)"
        );
        assert!(err.is_fetch_error());
    }

    #[test]
    fn test_storage_is_not_fetch_error() {
        let err = BrowseError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(!err.is_fetch_error());
    }
}
