//! Catalog entities
//!
//! Books, authors and genres as they appear in a catalog file. All of them
//! are immutable once the store has been built.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

entity_id!(
    /// Unique identifier of a book, also used as the preview marker
    BookId
);
entity_id!(
    /// Unique identifier of an author
    AuthorId
);
entity_id!(
    /// Unique identifier of a genre
    GenreId
);

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique book id
    pub id: BookId,

    /// Display title
    pub title: String,

    /// Author reference (must exist in the store)
    pub author: AuthorId,

    /// Genre references (each must exist in the store)
    #[serde(default)]
    pub genres: BTreeSet<GenreId>,

    /// Cover image URI
    #[serde(default)]
    pub image: String,

    /// Long-form description shown in the detail view
    #[serde(default)]
    pub description: String,

    /// Publication timestamp
    pub published: DateTime<Utc>,
}

impl Book {
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    pub fn has_genre(&self, genre: &GenreId) -> bool {
        self.genres.contains(genre)
    }
}

/// An author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

/// A genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

#[cfg(test)]
mod model_tests {
    use super::*;

    #[test]
    fn test_book_from_yaml() {
        let yaml = r#"
id: "42"
title: The Hobbit
author: tolkien
genres: [fantasy, classic]
image: https://example.org/hobbit.jpg
description: There and back again.
published: "1937-09-21T00:00:00Z"
pages: 310
"#;

        let book: Book = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(book.id, BookId::new("42"));
        assert_eq!(book.author.as_str(), "tolkien");
        assert!(book.has_genre(&GenreId::new("fantasy")));
        assert!(!book.has_genre(&GenreId::new("horror")));
        assert_eq!(book.published_year(), 1937);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"id":"1","title":"Bare","author":"a","published":"2001-01-01T00:00:00Z"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert!(book.genres.is_empty());
        assert!(book.image.is_empty());
        assert!(book.description.is_empty());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(AuthorId::from("abc").to_string(), "abc");
        assert_eq!(GenreId::from(String::from("x")).as_str(), "x");
    }
}
