use thiserror::Error;

/// Failure to retrieve the catalog from a listing source.
///
/// Every transport-level problem collapses into this one type so callers
/// handle a single "could not fetch" case.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Malformed catalog body: {0}")]
    Body(#[from] serde_json::Error),
    #[error("Listing source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Invalid email or password")]
    InvalidCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Please select a payment method")]
    NoMethodSelected,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Product not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> Result<(), FetchError> {
        Err(FetchError::Status {
            status: 404,
            url: "http://localhost/sneakers.json".to_string(),
        })
    }

    #[test]
    fn test_fetch_errors_reach_store_error_through_fetch() {
        let lifted = || -> Result<(), StoreError> { Ok(not_found()?) };
        let err = lifted().unwrap_err();
        assert!(matches!(
            err,
            StoreError::Fetch(FetchError::Status { status: 404, .. })
        ));
        assert_eq!(
            err.to_string(),
            "Unexpected status 404 from http://localhost/sneakers.json"
        );
    }
}
