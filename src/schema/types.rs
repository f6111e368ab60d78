//! GraphQL result envelopes and input types.

use async_graphql::{InputObject, SimpleObject};

use crate::model::{AuthorView, BookView, Comment};
use crate::pagination::Page;

/// A page of authors plus the unpaginated total.
#[derive(Debug, Clone, SimpleObject)]
pub struct AuthorsWithCount {
    pub authors: Vec<AuthorView>,
    pub count: i64,
}

impl From<Page<AuthorView>> for AuthorsWithCount {
    fn from(page: Page<AuthorView>) -> Self {
        Self {
            authors: page.items,
            count: page.total_count as i64,
        }
    }
}

/// A page of books plus the unpaginated total.
#[derive(Debug, Clone, SimpleObject)]
pub struct BooksWithCount {
    pub books: Vec<BookView>,
    pub count: i64,
}

impl From<Page<BookView>> for BooksWithCount {
    fn from(page: Page<BookView>) -> Self {
        Self {
            books: page.items,
            count: page.total_count as i64,
        }
    }
}

/// A page of one book's comments plus that book's unpaginated total.
#[derive(Debug, Clone, SimpleObject)]
pub struct CommentsWithCount {
    pub comments: Vec<Comment>,
    pub count: i64,
}

impl From<Page<Comment>> for CommentsWithCount {
    fn from(page: Page<Comment>) -> Self {
        Self {
            comments: page.items,
            count: page.total_count as i64,
        }
    }
}

/// Login credentials. Nothing validates these today.
#[derive(Debug, Clone, InputObject)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Session tokens returned by `login`.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Tokens")]
pub struct SessionTokens {
    pub access_token: String,
}
