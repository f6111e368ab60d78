//! Placeholder authentication.

use crate::schema::{LoginInput, SessionTokens};

/// The token every login returns. The client treats it as opaque and no
/// server path ever parses it.
const ACCESS_TOKEN: &str = "some token that we won't parse on front 'cause of fake auth";

/// Stub authentication service: accepts any credentials and returns a
/// fixed token. Not a security boundary.
#[derive(Debug, Clone, Default)]
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Always succeeds; the credentials are ignored.
    pub fn login(&self, _credentials: Option<LoginInput>) -> SessionTokens {
        SessionTokens {
            access_token: ACCESS_TOKEN.to_string(),
        }
    }
}
