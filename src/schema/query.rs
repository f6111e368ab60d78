//! GraphQL Query resolvers

use async_graphql::{ErrorExtensions, ID, Object, Result};

use crate::model::{AuthorView, BookView};
use crate::services::CatalogService;

use super::types::{AuthorsWithCount, BooksWithCount, CommentsWithCount};

/// Root query object
pub struct QueryRoot {
    catalog: CatalogService,
}

impl QueryRoot {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }
}

#[Object]
impl QueryRoot {
    /// A single author, with their book count
    async fn author(&self, id: ID) -> Result<AuthorView> {
        self.catalog.author(id.as_str()).map_err(|e| e.extend())
    }

    /// All authors with book counts, paginated
    async fn authors(
        &self,
        offset: Option<i32>,
        limit: Option<i32>,
    ) -> Result<AuthorsWithCount> {
        let page = self.catalog.authors(offset, limit).map_err(|e| e.extend())?;
        Ok(page.into())
    }

    /// A single book, with a snapshot of its author
    async fn book(&self, id: ID) -> Result<BookView> {
        self.catalog.book(id.as_str()).map_err(|e| e.extend())
    }

    /// All books with author snapshots, paginated
    async fn books(&self, offset: Option<i32>, limit: Option<i32>) -> Result<BooksWithCount> {
        let page = self.catalog.books(offset, limit).map_err(|e| e.extend())?;
        Ok(page.into())
    }

    /// One author's books, in collection order. Unknown ids yield an
    /// empty list, and no author snapshot is attached.
    async fn books_by_author(&self, id: ID) -> Result<Vec<BookView>> {
        let books = self
            .catalog
            .books_by_author(id.as_str())
            .map_err(|e| e.extend())?;
        Ok(books.into_iter().map(BookView::from).collect())
    }

    /// One book's comments, paginated; `count` is scoped to that book
    async fn comments(
        &self,
        book_id: ID,
        offset: Option<i32>,
        limit: Option<i32>,
    ) -> Result<CommentsWithCount> {
        let page = self
            .catalog
            .comments(book_id.as_str(), offset, limit)
            .map_err(|e| e.extend())?;
        Ok(page.into())
    }
}
