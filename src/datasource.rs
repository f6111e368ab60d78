//! Immutable snapshot of the catalog collections.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::DataSourceError;
use crate::model::{Author, Book, Comment};

/// The three catalog collections, loaded once and read-only for the
/// process lifetime.
///
/// Services hold this behind an `Arc` and fabricate it directly in tests
/// instead of going through fixture files.
#[derive(Debug, Clone, Default)]
pub struct DataSource {
    authors: Vec<Author>,
    books: Vec<Book>,
    comments: Vec<Comment>,
}

impl DataSource {
    pub fn new(authors: Vec<Author>, books: Vec<Book>, comments: Vec<Comment>) -> Self {
        Self {
            authors,
            books,
            comments,
        }
    }

    /// Load `authors.json`, `books.json`, and `comments.json` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, DataSourceError> {
        let dir = dir.as_ref();
        Ok(Self {
            authors: read_collection(&dir.join("authors.json"))?,
            books: read_collection(&dir.join("books.json"))?,
            comments: read_collection(&dir.join("comments.json"))?,
        })
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataSourceError> {
    let raw = fs::read_to_string(path).map_err(|source| DataSourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DataSourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_the_three_collections() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("authors.json"),
            r#"[{"id":1,"firstName":"Clara","lastName":"Mendoza","biography":"Writes about rivers."}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("books.json"),
            r#"[{"id":10,"author":1,"name":"Low Water","postDate":"2020-01-01","description":"A drought year."}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("comments.json"),
            r#"[{"id":100,"bookId":10,"name":"sam","comment":"Loved it."}]"#,
        )
        .unwrap();

        let data = DataSource::load(dir.path()).unwrap();
        assert_eq!(data.authors().len(), 1);
        assert_eq!(data.authors()[0].first_name, "Clara");
        assert_eq!(data.books()[0].post_date, "2020-01-01");
        assert_eq!(data.comments()[0].book_id, 10);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = DataSource::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataSourceError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("authors.json"), "not json").unwrap();

        let err = DataSource::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataSourceError::Parse { .. }));
    }
}
