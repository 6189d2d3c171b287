//! Filter engine
//!
//! Evaluates a [`FilterCriteria`] against every book in the catalog and
//! returns the matches in catalog order. Title, author and genre clauses are
//! ANDed; an id that matches nothing simply yields an empty result.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::catalog::{AuthorId, Book, GenreId};

/// Form value meaning "do not filter on this field"
pub const ANY: &str = "any";

macro_rules! id_filter {
    ($(#[$meta:meta])* $name:ident, $id:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            #[default]
            Any,
            Specific($id),
        }

        impl $name {
            pub fn is_any(&self) -> bool {
                matches!(self, Self::Any)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(value.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                if value == ANY {
                    Self::Any
                } else {
                    Self::Specific(<$id>::from(value))
                }
            }
        }

        impl From<$name> for String {
            fn from(filter: $name) -> Self {
                filter.to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Any => f.write_str(ANY),
                    Self::Specific(id) => write!(f, "{id}"),
                }
            }
        }
    };
}

id_filter!(
    /// Author clause: `"any"` on the wire, otherwise an author id
    AuthorFilter,
    AuthorId
);
id_filter!(
    /// Genre clause: `"any"` on the wire, otherwise a genre id
    GenreFilter,
    GenreId
);

/// One search submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text title query; empty or whitespace matches everything
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: AuthorFilter,

    #[serde(default)]
    pub genre: GenreFilter,
}

impl FilterCriteria {
    /// Build criteria from raw form values
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string().into(),
            genre: genre.to_string().into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: AuthorId) -> Self {
        self.author = AuthorFilter::Specific(author);
        self
    }

    pub fn with_genre(mut self, genre: GenreId) -> Self {
        self.genre = GenreFilter::Specific(genre);
        self
    }

    /// True when no clause restricts the result
    pub fn is_unrestricted(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }

    /// Compile into a reusable predicate (lowercases the title query once)
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher {
            title: (!self.title.trim().is_empty()).then(|| self.title.to_lowercase()),
            criteria: self,
        }
    }
}

/// Compiled form of [`FilterCriteria`]
#[derive(Debug)]
pub struct Matcher<'c> {
    title: Option<String>,
    criteria: &'c FilterCriteria,
}

impl Matcher<'_> {
    pub fn title_matches(&self, book: &Book) -> bool {
        match &self.title {
            None => true,
            Some(query) => book.title.to_lowercase().contains(query.as_str()),
        }
    }

    pub fn author_matches(&self, book: &Book) -> bool {
        match &self.criteria.author {
            AuthorFilter::Any => true,
            AuthorFilter::Specific(id) => &book.author == id,
        }
    }

    pub fn genre_matches(&self, book: &Book) -> bool {
        match &self.criteria.genre {
            GenreFilter::Any => true,
            GenreFilter::Specific(id) => book.has_genre(id),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.title_matches(book) && self.author_matches(book) && self.genre_matches(book)
    }
}

/// Ordered subset of the catalog satisfying one set of criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchSet<'a> {
    books: Vec<&'a Book>,
}

impl<'a> MatchSet<'a> {
    /// Every book, in catalog order
    pub fn all(catalog: &'a [Book]) -> Self {
        Self {
            books: catalog.iter().collect(),
        }
    }

    pub fn as_slice(&self) -> &[&'a Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Book> + '_ {
        self.books.iter().copied()
    }
}

impl<'a> FromIterator<&'a Book> for MatchSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

/// Filter the catalog, preserving its order
pub fn evaluate<'a>(catalog: &'a [Book], criteria: &FilterCriteria) -> MatchSet<'a> {
    let matcher = criteria.matcher();
    let matches: MatchSet<'a> = catalog.iter().filter(|book| matcher.matches(book)).collect();

    debug!(
        title = %criteria.title,
        author = %criteria.author,
        genre = %criteria.genre,
        matched = matches.len(),
        total = catalog.len(),
        "Evaluated filter"
    );

    matches
}

/// An entry in an author or genre select list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
