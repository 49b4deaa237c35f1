use crate::error::StoreError;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "https://sneakers-global-default-rtdb.asia-southeast1.firebasedatabase.app/sneakers.json";
pub const DEFAULT_PAGE_SIZE: usize = 10;
const USER_AGENT: &str = "sneakers-core/0.1";
const SPLASH_DELAY: Duration = Duration::from_millis(3000);
const LOGIN_DELAY: Duration = Duration::from_millis(1500);

const ENDPOINT_VAR: &str = "SNEAKERS_ENDPOINT";
const PAGE_SIZE_VAR: &str = "SNEAKERS_PAGE_SIZE";

/// Runtime settings shared by the frontends.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub endpoint: String,
    pub page_size: usize,
    pub user_agent: String,
    pub splash_delay: Duration,
    pub login_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: USER_AGENT.to_string(),
            splash_delay: SPLASH_DELAY,
            login_delay: LOGIN_DELAY,
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by `SNEAKERS_ENDPOINT` / `SNEAKERS_PAGE_SIZE`.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, StoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            let endpoint = endpoint.trim();
            if endpoint.is_empty() {
                return Err(StoreError::Config(format!("{} is empty", ENDPOINT_VAR)));
            }
            config.endpoint = endpoint.to_string();
        }

        if let Some(raw) = lookup(PAGE_SIZE_VAR) {
            config.page_size = parse_page_size(&raw)?;
        }

        log::debug!(
            "Store config: endpoint={}, page_size={}",
            config.endpoint,
            config.page_size
        );
        Ok(config)
    }
}

fn parse_page_size(raw: &str) -> Result<usize, StoreError> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(StoreError::Config(format!(
            "{} must be a positive integer, got '{}'",
            PAGE_SIZE_VAR, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_reference_values() {
        let config = StoreConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.splash_delay, Duration::from_secs(3));
        assert_eq!(config.login_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_env_overrides() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (ENDPOINT_VAR, "http://localhost:8080/sneakers.json"),
            (PAGE_SIZE_VAR, "25"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/sneakers.json");
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_invalid_page_size_rejected() {
        for bad in ["0", "-3", "ten", ""] {
            let result = StoreConfig::from_lookup(lookup_from(&[(PAGE_SIZE_VAR, bad)]));
            assert!(
                matches!(result, Err(StoreError::Config(_))),
                "page size '{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let result = StoreConfig::from_lookup(lookup_from(&[(ENDPOINT_VAR, "  ")]));
        assert!(matches!(result, Err(StoreError::Config(_))));
    }
}
