//! GraphQL schema definitions

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::*;

use async_graphql::{EmptySubscription, ErrorExtensions, Schema};

use crate::error::CatalogError;
use crate::services::{AuthService, CatalogService};

/// The executable schema: catalog queries plus the login stub.
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over the given services.
pub fn build_schema(catalog: CatalogService, auth: AuthService) -> CatalogSchema {
    Schema::build(
        QueryRoot::new(catalog),
        MutationRoot::new(auth),
        EmptySubscription,
    )
    .finish()
}

impl ErrorExtensions for CatalogError {
    fn extend(&self) -> async_graphql::Error {
        let code = match self {
            CatalogError::InvalidArgument(_) => "BAD_USER_INPUT",
            CatalogError::AuthorNotFound(_) | CatalogError::BookNotFound(_) => "NOT_FOUND",
        };
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}
