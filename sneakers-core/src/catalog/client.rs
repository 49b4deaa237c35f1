use crate::config::StoreConfig;
use crate::error::FetchError;
use log::debug;

const ACCEPT: &str = "application/json";

/// HTTP client for the listing endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(config: &StoreConfig) -> Result<Self, FetchError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(ACCEPT),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(CatalogClient {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the endpoint; any non-success status is an error.
    pub async fn call(&self) -> Result<reqwest::Response, FetchError> {
        debug!("calling listing endpoint: {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;
        check_status(response.status(), &self.endpoint)?;
        Ok(response)
    }
}

fn check_status(status: reqwest::StatusCode, url: &str) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }
    debug!("listing endpoint answered {}", status);
    Err(FetchError::Status {
        status: status.as_u16(),
        url: url.to_string(),
    })
}
