//! View records handed to whatever renders the catalog
//!
//! These are plain data. Markup, styling and overlay state belong to the
//! renderer.

use serde::Serialize;

use crate::catalog::{Book, CatalogStore};

/// One rendered preview in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// Marker value carried by the preview node
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
}

impl Preview {
    pub fn new(book: &Book, store: &CatalogStore) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            author: store.author_name(&book.author).to_string(),
            image: book.image.clone(),
        }
    }
}

/// Detail view content for the selected book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetail {
    pub title: String,
    /// "Author Name (Year)"
    pub subtitle: String,
    pub description: String,
    pub image: String,
}

impl BookDetail {
    pub fn new(book: &Book, store: &CatalogStore) -> Self {
        Self {
            title: book.title.clone(),
            subtitle: format!(
                "{} ({})",
                store.author_name(&book.author),
                book.published_year()
            ),
            description: book.description.clone(),
            image: book.image.clone(),
        }
    }
}

/// State of the "show more" control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowMore {
    pub remaining: usize,
    pub enabled: bool,
}

impl ShowMore {
    pub fn new(remaining: usize) -> Self {
        Self {
            remaining,
            enabled: remaining > 0,
        }
    }

    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }
}

/// Message shown in place of the list when a search matches nothing
pub const EMPTY_STATE_MESSAGE: &str = "No results found. Your filters might be too narrow.";
