use std::collections::HashSet;
use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use crate::app_system::AdminConfig;

pub const SESSION_TOKEN_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid or expired session")]
    InvalidSession,
}

/// Decides whether a username/password pair may open a session.
pub trait Authenticator: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Compares against a single configured account.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthenticator {
    credentials: Option<(String, String)>,
}

impl StaticAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { credentials: Some((username.into(), password.into())) }
    }

    /// Both fields must be set, otherwise every login is rejected.
    pub fn from_config(config: &AdminConfig) -> Self {
        match (&config.username, &config.password) {
            (Some(username), Some(password)) => Self::new(username, password),
            _ => Self::default(),
        }
    }
}

impl Authenticator for StaticAuthenticator {
    fn verify(&self, username: &str, password: &str) -> bool {
        match &self.credentials {
            Some((expected_user, expected_password)) => {
                username == expected_user && password == expected_password
            }
            None => false,
        }
    }
}

/// Opaque bearer token handed out on login.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    fn generate() -> Self {
        let token = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_TOKEN_LEN)
            .map(char::from)
            .collect();
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

// Keep tokens out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

pub struct SessionManager<A: Authenticator> {
    authenticator: A,
    sessions: Mutex<HashSet<SessionToken>>,
}

impl<A: Authenticator> SessionManager<A> {
    pub fn new(authenticator: A) -> Self {
        Self { authenticator, sessions: Mutex::new(HashSet::new()) }
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionToken, AuthError> {
        if !self.authenticator.verify(username, password) {
            warn!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let token = SessionToken::generate();
        self.sessions.lock().await.insert(token.clone());
        info!("Session opened");
        Ok(token)
    }

    /// Returns `false` if the token was not an open session.
    #[instrument(skip_all)]
    pub async fn logout(&self, token: &SessionToken) -> bool {
        let removed = self.sessions.lock().await.remove(token);
        if removed {
            info!("Session closed");
        }
        removed
    }

    pub async fn validate(&self, token: &SessionToken) -> Result<(), AuthError> {
        if self.sessions.lock().await.contains(token) {
            Ok(())
        } else {
            Err(AuthError::InvalidSession)
        }
    }
}
