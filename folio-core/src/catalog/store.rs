//! Catalog store loading and lookups
//!
//! A catalog file lists authors, genres and books. The store is built once,
//! checked for referential integrity, and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use super::{Author, AuthorId, Book, BookId, Genre, GenreId};
use crate::error::{CatalogError, Result};
use crate::filter::{FilterOption, ANY};

/// On-disk catalog layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub genres: Vec<Genre>,

    #[serde(default)]
    pub books: Vec<Book>,
}

/// Immutable, validated collection of books, authors and genres
#[derive(Debug, Clone)]
pub struct CatalogStore {
    books: Vec<Book>,
    authors: Vec<Author>,
    genres: Vec<Genre>,
    book_index: HashMap<BookId, usize>,
    author_index: HashMap<AuthorId, usize>,
    genre_index: HashMap<GenreId, usize>,
}

impl CatalogStore {
    /// Build a store from its parts, rejecting duplicate ids and dangling
    /// author/genre references
    pub fn from_parts(books: Vec<Book>, authors: Vec<Author>, genres: Vec<Genre>) -> Result<Self> {
        let mut author_index = HashMap::with_capacity(authors.len());
        for (pos, author) in authors.iter().enumerate() {
            if author_index.insert(author.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateAuthor(author.id.clone()));
            }
        }

        let mut genre_index = HashMap::with_capacity(genres.len());
        for (pos, genre) in genres.iter().enumerate() {
            if genre_index.insert(genre.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateGenre(genre.id.clone()));
            }
        }

        let mut book_index = HashMap::with_capacity(books.len());
        for (pos, book) in books.iter().enumerate() {
            if book_index.insert(book.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateBook(book.id.clone()));
            }

            if !author_index.contains_key(&book.author) {
                return Err(CatalogError::UnknownAuthor {
                    book: book.id.clone(),
                    author: book.author.clone(),
                });
            }

            if let Some(genre) = book.genres.iter().find(|g| !genre_index.contains_key(*g)) {
                return Err(CatalogError::UnknownGenre {
                    book: book.id.clone(),
                    genre: genre.clone(),
                });
            }
        }

        info!(
            books = books.len(),
            authors = authors.len(),
            genres = genres.len(),
            "Catalog loaded"
        );

        Ok(Self {
            books,
            authors,
            genres,
            book_index,
            author_index,
            genre_index,
        })
    }

    pub fn from_catalog_file(file: CatalogFile) -> Result<Self> {
        Self::from_parts(file.books, file.authors, file.genres)
    }

    /// Parse and validate a YAML catalog
    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_yaml_ng::from_str(content).map_err(|source| CatalogError::Yaml { source })?;
        Self::from_catalog_file(file)
    }

    /// Parse and validate a JSON catalog
    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(content).map_err(|source| CatalogError::Json { source })?;
        Self::from_catalog_file(file)
    }

    /// Load a catalog file, picking the parser from the extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        debug!("Reading catalog from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        parse(&content)
    }

    /// All books in catalog order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All authors in catalog order
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// All genres in catalog order
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn book(&self, id: &BookId) -> Option<&Book> {
        self.book_index.get(id).map(|&pos| &self.books[pos])
    }

    pub fn author(&self, id: &AuthorId) -> Option<&Author> {
        self.author_index.get(id).map(|&pos| &self.authors[pos])
    }

    pub fn genre(&self, id: &GenreId) -> Option<&Genre> {
        self.genre_index.get(id).map(|&pos| &self.genres[pos])
    }

    /// Display name for an author, empty if unknown
    pub fn author_name(&self, id: &AuthorId) -> &str {
        self.author(id).map(|a| a.name.as_str()).unwrap_or_default()
    }

    /// Author select options, "All Authors" first
    pub fn author_options(&self) -> Vec<FilterOption> {
        std::iter::once(FilterOption::new(ANY, "All Authors"))
            .chain(
                self.authors
                    .iter()
                    .map(|a| FilterOption::new(a.id.as_str(), &a.name)),
            )
            .collect()
    }

    /// Genre select options, "All Genres" first
    pub fn genre_options(&self) -> Vec<FilterOption> {
        std::iter::once(FilterOption::new(ANY, "All Genres"))
            .chain(
                self.genres
                    .iter()
                    .map(|g| FilterOption::new(g.id.as_str(), &g.name)),
            )
            .collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;

    fn sample_catalog_yaml() -> &'static str {
        r#"
authors:
  - id: a1
    name: Ursula K. Le Guin
  - id: a2
    name: Terry Pratchett
genres:
  - id: g1
    name: Fantasy
  - id: g2
    name: Science Fiction
books:
  - id: b1
    title: A Wizard of Earthsea
    author: a1
    genres: [g1]
    published: "1968-11-01T00:00:00Z"
  - id: b2
    title: The Left Hand of Darkness
    author: a1
    genres: [g2]
    published: "1969-03-01T00:00:00Z"
  - id: b3
    title: Guards! Guards!
    author: a2
    genres: [g1]
    published: "1989-11-01T00:00:00Z"
"#
    }

    #[test]
    fn test_parse_catalog() {
        let store = CatalogStore::from_yaml(sample_catalog_yaml()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.authors().len(), 2);
        assert_eq!(store.genres().len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_lookups() {
        let store = CatalogStore::from_yaml(sample_catalog_yaml()).unwrap();

        let book = store.book(&BookId::new("b3")).unwrap();
        assert_eq!(book.title, "Guards! Guards!");
        assert_eq!(store.author_name(&book.author), "Terry Pratchett");
        assert_eq!(store.genre(&GenreId::new("g2")).unwrap().name, "Science Fiction");

        assert!(store.book(&BookId::new("missing")).is_none());
        assert_eq!(store.author_name(&AuthorId::new("missing")), "");
    }

    #[test]
    fn test_options_start_with_any() {
        let store = CatalogStore::from_yaml(sample_catalog_yaml()).unwrap();

        let authors = store.author_options();
        assert_eq!(authors.len(), 3);
        assert_eq!(authors[0], FilterOption::new("any", "All Authors"));
        assert_eq!(authors[1], FilterOption::new("a1", "Ursula K. Le Guin"));

        let genres = store.genre_options();
        assert_eq!(genres[0], FilterOption::new("any", "All Genres"));
        assert_eq!(genres[2], FilterOption::new("g2", "Science Fiction"));
    }

    #[test]
    fn test_unknown_author_rejected() {
        let yaml = r#"
authors: []
genres: []
books:
  - id: b1
    title: Orphan
    author: nobody
    published: "2000-01-01T00:00:00Z"
"#;

        let err = CatalogStore::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownAuthor { .. }));
        assert!(err.to_string().contains("unknown author 'nobody'"));
    }

    #[test]
    fn test_unknown_genre_rejected() {
        let yaml = r#"
authors:
  - id: a1
    name: Someone
genres:
  - id: g1
    name: Fantasy
books:
  - id: b1
    title: Misfiled
    author: a1
    genres: [g1, g9]
    published: "2000-01-01T00:00:00Z"
"#;

        let err = CatalogStore::from_yaml(yaml).unwrap_err();
        match err {
            CatalogError::UnknownGenre { book, genre } => {
                assert_eq!(book.as_str(), "b1");
                assert_eq!(genre.as_str(), "g9");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_book_rejected() {
        let yaml = r#"
authors:
  - id: a1
    name: Someone
books:
  - id: b1
    title: First
    author: a1
    published: "2000-01-01T00:00:00Z"
  - id: b1
    title: Second
    author: a1
    published: "2001-01-01T00:00:00Z"
"#;

        let err = CatalogStore::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateBook(id) if id.as_str() == "b1"));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = CatalogStore::from_yaml("books: [unclosed").unwrap_err();
        assert!(matches!(err, CatalogError::Yaml { .. }));
    }
}
