use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

use super::{RecipeQuery, RecipeSource};
use crate::error::{BrowseError, Result};
use crate::model::Recipe;

/// Recipe endpoint with server-side filtering
///
/// Lists come from `GET {base}/recipes` with an optional `q` or `category`
/// parameter, single recipes from `GET {base}/recipes/{id}`.
pub struct ApiSource {
    client: Client,
    base_url: Url,
}

impl ApiSource {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| BrowseError::InvalidInput(format!("Invalid base URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BrowseError::InvalidInput(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout.unwrap_or(Duration::from_secs(30)))
            .user_agent(concat!("recipe-browser/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl RecipeSource for ApiSource {
    fn name(&self) -> &str {
        "api"
    }

    async fn list(&self, query: &RecipeQuery) -> Result<Vec<Recipe>> {
        let url = self.endpoint(&["recipes"]);
        let request = match query {
            RecipeQuery::All => self.client.get(url.clone()),
            RecipeQuery::Search(text) => self.client.get(url.clone()).query(&[("q", text)]),
            RecipeQuery::Category(label) => {
                self.client.get(url.clone()).query(&[("category", label)])
            }
        };

        debug!("Fetching {} from {}", query, url);
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(BrowseError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get(&self, id: &str) -> Result<Option<Recipe>> {
        let url = self.endpoint(&["recipes", id]);
        debug!("Fetching recipe {} from {}", id, url);

        let response = self.client.get(url.clone()).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body = response.bytes().await?;
                Ok(Some(serde_json::from_slice(&body)?))
            }
            status => Err(BrowseError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let source = ApiSource::new("http://localhost:3002", None).unwrap();
        assert_eq!(
            source.endpoint(&["recipes"]).as_str(),
            "http://localhost:3002/recipes"
        );

        let nested = ApiSource::new("http://example.com/api/", None).unwrap();
        assert_eq!(
            nested.endpoint(&["recipes", "42"]).as_str(),
            "http://example.com/api/recipes/42"
        );
    }

    #[test]
    fn test_endpoint_escapes_ids() {
        let source = ApiSource::new("http://localhost:3002", None).unwrap();
        assert_eq!(
            source.endpoint(&["recipes", "a/b c"]).as_str(),
            "http://localhost:3002/recipes/a%2Fb%20c"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ApiSource::new("not a url", None),
            Err(BrowseError::InvalidInput(_))
        ));
        assert!(matches!(
            ApiSource::new("mailto:chef@example.com", None),
            Err(BrowseError::InvalidInput(_))
        ));
    }
}
