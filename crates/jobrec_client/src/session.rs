/// Read-only view of the current user's authentication state.
///
/// The store never initiates login or refresh. It reads whatever credential
/// the session holds, once per request.
pub trait TokenProvider: Send + Sync {
    /// Current bearer token, if the user has one.
    fn token(&self) -> Option<String>;
}

/// Fixed-credential provider for tests and one-shot tools.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Provider for a user with no credential at all.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl TokenProvider for StaticTokenProvider {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}
