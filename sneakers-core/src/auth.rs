use crate::error::AuthError;
use async_trait::async_trait;
use log::{debug, info};

const DEMO_EMAIL: &str = "kiki@gmail.com";
const DEMO_PASSWORD: &str = "kikipoiu";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

/// Verifies credentials. The UI only ever talks to this trait, so a real
/// identity provider can replace [`StubAuthenticator`].
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Accepts exactly one configured account.
#[derive(Debug, Clone)]
pub struct StubAuthenticator {
    account: Credentials,
}

impl StubAuthenticator {
    pub fn new(account: Credentials) -> Self {
        Self { account }
    }

    /// The storefront's built-in demo account.
    pub fn demo() -> Self {
        Self::new(Credentials::new(DEMO_EMAIL, DEMO_PASSWORD))
    }
}

impl Default for StubAuthenticator {
    fn default() -> Self {
        Self::demo()
    }
}

#[async_trait]
impl Authenticator for StubAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if !credentials.is_complete() {
            return Err(AuthError::MissingFields);
        }

        let email = credentials.email.trim();
        if email == self.account.email && credentials.password == self.account.password {
            info!("login accepted for {}", email);
            Ok(Session {
                email: email.to_string(),
            })
        } else {
            debug!("login rejected for {}", email);
            Err(AuthError::InvalidCredentials)
        }
    }
}
