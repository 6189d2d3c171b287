//! Folio Catalog - the static book collection
//!
//! The catalog is loaded once from a YAML or JSON file and is read-only for
//! the rest of the process. Every other component borrows from it.
//!
//! # Layout
//!
//! ```text
//! catalog.yaml
//!     ├── authors   ← id + display name
//!     ├── genres    ← id + display name
//!     └── books     ← reference one author and any number of genres
//! ```
//!
//! Referential integrity (unique ids, known authors and genres) is checked
//! by [`CatalogStore::from_parts`]; nothing downstream re-validates it.

mod model;
mod store;

pub use model::{Author, AuthorId, Book, BookId, Genre, GenreId};
pub use store::{CatalogFile, CatalogStore};
