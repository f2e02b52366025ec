//! Session token storage.

use secrecy::{ExposeSecret, SecretString};

/// Holds the token issued by `Session.login`.
///
/// The token is wrapped in [`SecretString`] so it never appears in `Debug` output.
#[derive(Debug, Default)]
pub struct AuthState {
    token: Option<SecretString>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token, replacing any previous one.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(SecretString::new(token.into().into()));
    }

    /// Forget the current token.
    pub fn clear(&mut self) {
        self.token = None;
    }

    /// The current token, if logged in.
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
