//! Catalog loading errors with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::{AuthorId, BookId, GenreId};

/// Errors raised while building a catalog store
///
/// Everything past a successful load is infallible: unknown ids and
/// unresolved selections are empty results, not errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read a catalog file
    #[error("Failed to read catalog from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file extension is not one we know how to parse
    #[error("Unsupported catalog format: {path}\n\nExpected a .yaml, .yml or .json file")]
    UnsupportedFormat { path: PathBuf },

    /// Failed to parse a YAML catalog
    #[error("Failed to parse catalog YAML")]
    Yaml {
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Failed to parse a JSON catalog
    #[error("Failed to parse catalog JSON")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// Two books share an id
    #[error("Duplicate book id '{0}' in catalog")]
    DuplicateBook(BookId),

    /// Two authors share an id
    #[error("Duplicate author id '{0}' in catalog")]
    DuplicateAuthor(AuthorId),

    /// Two genres share an id
    #[error("Duplicate genre id '{0}' in catalog")]
    DuplicateGenre(GenreId),

    /// A book references an author that is not in the catalog
    #[error("Book '{book}' references unknown author '{author}'")]
    UnknownAuthor { book: BookId, author: AuthorId },

    /// A book references a genre that is not in the catalog
    #[error("Book '{book}' references unknown genre '{genre}'")]
    UnknownGenre { book: BookId, genre: GenreId },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
