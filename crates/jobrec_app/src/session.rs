use std::sync::RwLock;

use jobrec_client::TokenProvider;

/// Process-wide user session handed to the store at construction.
///
/// Login and refresh flows live elsewhere; this only holds the current
/// credential for readers.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }

    /// Replaces the stored credential, e.g. after login or logout.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().expect("lock session token") = token;
    }
}

impl TokenProvider for Session {
    fn token(&self) -> Option<String> {
        self.token.read().expect("lock session token").clone()
    }
}
