//! Query resolution over the catalog: joins, lookups, pagination.

use std::collections::HashMap;
use std::sync::Arc;

use crate::datasource::DataSource;
use crate::error::CatalogError;
use crate::model::{AuthorView, Book, BookView, Comment};
use crate::pagination::{Page, PageArgs, paginate};

/// Read-only query service over an immutable catalog snapshot.
///
/// Derived fields are recomputed from the snapshot on every call; the
/// service holds no state beyond the shared [`DataSource`], so clones are
/// cheap and calls need no coordination.
#[derive(Debug, Clone)]
pub struct CatalogService {
    data: Arc<DataSource>,
}

impl CatalogService {
    pub fn new(data: Arc<DataSource>) -> Self {
        Self { data }
    }

    /// All authors, each annotated with the number of books referencing
    /// them. Books are indexed by author id first so the pass over the
    /// authors stays linear.
    fn authors_with_book_counts(&self) -> Vec<AuthorView> {
        let mut counts: HashMap<i64, i64> = HashMap::new();
        for book in self.data.books() {
            *counts.entry(book.author).or_insert(0) += 1;
        }

        self.data
            .authors()
            .iter()
            .map(|author| {
                let count = counts.get(&author.id).copied().unwrap_or(0);
                AuthorView::new(author.clone(), count)
            })
            .collect()
    }

    /// All books, each annotated with a snapshot of its author. A book
    /// whose author id does not resolve keeps an absent snapshot.
    fn books_with_author_info(&self) -> Vec<BookView> {
        self.data
            .books()
            .iter()
            .map(|book| {
                let author = self
                    .data
                    .authors()
                    .iter()
                    .find(|author| author.id == book.author)
                    .cloned();
                BookView::new(book.clone(), author)
            })
            .collect()
    }

    /// Find one author by id, with their book count.
    pub fn author(&self, id: &str) -> Result<AuthorView, CatalogError> {
        let id = parse_id(id)?;
        self.authors_with_book_counts()
            .into_iter()
            .find(|author| author.id == id)
            .ok_or(CatalogError::AuthorNotFound(id))
    }

    /// All authors with book counts, paginated.
    pub fn authors(
        &self,
        offset: Option<i32>,
        limit: Option<i32>,
    ) -> Result<Page<AuthorView>, CatalogError> {
        let args = PageArgs::from_raw(offset, limit)?;
        Ok(paginate(self.authors_with_book_counts(), args))
    }

    /// Find one book by id, with its author snapshot.
    pub fn book(&self, id: &str) -> Result<BookView, CatalogError> {
        let id = parse_id(id)?;
        self.books_with_author_info()
            .into_iter()
            .find(|book| book.id == id)
            .ok_or(CatalogError::BookNotFound(id))
    }

    /// All books with author snapshots, paginated.
    pub fn books(
        &self,
        offset: Option<i32>,
        limit: Option<i32>,
    ) -> Result<Page<BookView>, CatalogError> {
        let args = PageArgs::from_raw(offset, limit)?;
        Ok(paginate(self.books_with_author_info(), args))
    }

    /// Books written by the given author, unjoined and unpaginated. An
    /// unknown author id is an empty result, not an error.
    pub fn books_by_author(&self, id: &str) -> Result<Vec<Book>, CatalogError> {
        let id = parse_id(id)?;
        Ok(self
            .data
            .books()
            .iter()
            .filter(|book| book.author == id)
            .cloned()
            .collect())
    }

    /// Comments on the given book, paginated. `total_count` reflects the
    /// filtered sequence, not the whole comments collection.
    pub fn comments(
        &self,
        book_id: &str,
        offset: Option<i32>,
        limit: Option<i32>,
    ) -> Result<Page<Comment>, CatalogError> {
        let book_id = parse_id(book_id)?;
        let args = PageArgs::from_raw(offset, limit)?;
        let filtered: Vec<Comment> = self
            .data
            .comments()
            .iter()
            .filter(|comment| comment.book_id == book_id)
            .cloned()
            .collect();
        Ok(paginate(filtered, args))
    }
}

/// Parse a string-encoded identifier.
///
/// Transport layers hand ids over as opaque strings; a malformed one is a
/// caller error, never a silent id 0.
fn parse_id(raw: &str) -> Result<i64, CatalogError> {
    raw.parse().map_err(|_| {
        CatalogError::InvalidArgument(format!("expected a numeric id, got {raw:?}"))
    })
}
