//! Test helper functions for integration tests
//!
//! Shared across the integration test files using the tests/common/
//! pattern. Not every test file uses every helper.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use folio_core::catalog::{Author, Book, CatalogStore, Genre, GenreId};
use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub const AUTHOR_IDS: &[&str] = &["austen", "le-guin", "pratchett"];
pub const GENRE_IDS: &[&str] = &["classic", "fantasy", "humour", "scifi"];

pub fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
    Book {
        id: id.into(),
        title: title.to_string(),
        author: author.into(),
        genres: genres.iter().map(|g| GenreId::from(*g)).collect(),
        image: format!("https://covers.example.org/{id}.jpg"),
        description: format!("Description of {title}"),
        published: Utc.with_ymd_and_hms(2001, 3, 14, 0, 0, 0).unwrap(),
    }
}

pub fn authors() -> Vec<Author> {
    vec![
        Author {
            id: "austen".into(),
            name: "Jane Austen".to_string(),
        },
        Author {
            id: "le-guin".into(),
            name: "Ursula K. Le Guin".to_string(),
        },
        Author {
            id: "pratchett".into(),
            name: "Terry Pratchett".to_string(),
        },
    ]
}

pub fn genres() -> Vec<Genre> {
    GENRE_IDS
        .iter()
        .map(|id| Genre {
            id: (*id).into(),
            name: id.to_uppercase(),
        })
        .collect()
}

/// `count` books cycling through authors and genres, ids "0".."count-1"
pub fn numbered_store(count: usize) -> CatalogStore {
    let books = (0..count)
        .map(|i| {
            book(
                &i.to_string(),
                &format!("Volume {i}"),
                AUTHOR_IDS[i % AUTHOR_IDS.len()],
                &[GENRE_IDS[i % GENRE_IDS.len()]],
            )
        })
        .collect();

    CatalogStore::from_parts(books, authors(), genres()).unwrap()
}

/// Store built from arbitrary books; authors and genres are the fixed sets
pub fn store_with(books: Vec<Book>) -> CatalogStore {
    CatalogStore::from_parts(books, authors(), genres()).unwrap()
}
