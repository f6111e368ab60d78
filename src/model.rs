//! Catalog records and the derived views the query layer computes.
//!
//! Records mirror the fixture files field for field (camelCase on the
//! wire). Views are computed per query from a [`DataSource`] snapshot and
//! are never stored.
//!
//! [`DataSource`]: crate::datasource::DataSource

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// An author record.
///
/// In the schema this shape appears as `AuthorInfo`, the snapshot embedded
/// in a book. The standalone `Author` schema type is [`AuthorView`], which
/// adds the derived book count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "AuthorInfo")]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

/// A book record. `author` is a foreign key into the authors collection
/// and is not guaranteed to resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub author: i64,
    pub name: String,
    pub post_date: String,
    pub description: String,
}

/// A reader comment. `book_id` is a foreign key into the books collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub book_id: i64,
    pub name: String,
    pub comment: String,
}

/// An author annotated with the number of books referencing them.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Author")]
pub struct AuthorView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
    pub book_count: i64,
}

impl AuthorView {
    pub fn new(author: Author, book_count: i64) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
            biography: author.biography,
            book_count,
        }
    }
}

/// A book annotated with a snapshot of its author.
///
/// `author_info` is absent when the foreign key does not resolve, or when
/// the operation that produced this view does not join (`booksByAuthor`).
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Book")]
pub struct BookView {
    pub id: i64,
    pub author: i64,
    pub name: String,
    pub post_date: String,
    pub description: String,
    pub author_info: Option<Author>,
}

impl BookView {
    pub fn new(book: Book, author_info: Option<Author>) -> Self {
        Self {
            id: book.id,
            author: book.author,
            name: book.name,
            post_date: book.post_date,
            description: book.description,
            author_info,
        }
    }
}

impl From<Book> for BookView {
    fn from(book: Book) -> Self {
        Self::new(book, None)
    }
}
