//! Folio core library exports
//!
//! Catalog view state engine: filter evaluation, windowed paging and
//! click-to-book resolution over a static book catalog.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod present;
pub mod selection;
pub mod settings;
pub mod view;

pub use catalog::{Author, AuthorId, Book, BookId, CatalogStore, Genre, GenreId};
pub use error::CatalogError;
pub use filter::{evaluate, AuthorFilter, FilterCriteria, GenreFilter, MatchSet};
pub use paginate::{Paginator, Window, DEFAULT_PAGE_SIZE};
pub use selection::{resolve, PathNode, PreviewMarker};
pub use view::CatalogViewState;
