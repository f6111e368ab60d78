//! GraphQL Mutation resolvers

use async_graphql::Object;

use crate::services::AuthService;

use super::types::{LoginInput, SessionTokens};

/// Root mutation object
pub struct MutationRoot {
    auth: AuthService,
}

impl MutationRoot {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

#[Object]
impl MutationRoot {
    /// Issue session tokens. Credentials are accepted unchecked; see
    /// [`AuthService`] for the contract.
    async fn login(&self, data: Option<LoginInput>) -> SessionTokens {
        self.auth.login(data)
    }
}
