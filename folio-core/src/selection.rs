//! Selection resolver
//!
//! A click on a preview bubbles up through the nodes that contain it. The
//! resolver walks that path innermost first, stops at the first node that
//! carries a preview marker and looks the marker up in the catalog.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Book;

/// A UI node that may carry a preview marker
pub trait PreviewMarker {
    /// Book id attached to this node, if any
    fn preview_id(&self) -> Option<&str>;
}

impl<T: PreviewMarker + ?Sized> PreviewMarker for &T {
    fn preview_id(&self) -> Option<&str> {
        (**self).preview_id()
    }
}

/// Plain interaction path node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathNode {
    /// Node kind, e.g. "span" or "button"; informational only
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl PathNode {
    /// A node without a marker
    pub fn plain(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            preview: None,
        }
    }

    /// A node marked with a book id
    pub fn marked(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            preview: Some(id.into()),
        }
    }
}

impl PreviewMarker for PathNode {
    fn preview_id(&self) -> Option<&str> {
        // An empty marker counts as no marker
        self.preview.as_deref().filter(|id| !id.is_empty())
    }
}

/// Resolve an interaction path to the book it represents
///
/// Only the innermost marked node is considered. A marker that matches no
/// book is a normal miss and returns `None`.
pub fn resolve<'a, N: PreviewMarker>(path: &[N], catalog: &'a [Book]) -> Option<&'a Book> {
    let Some((depth, marker)) = path
        .iter()
        .enumerate()
        .find_map(|(depth, node)| node.preview_id().map(|id| (depth, id)))
    else {
        debug!(path_len = path.len(), "No preview marker on interaction path");
        return None;
    };

    let book = catalog.iter().find(|book| book.id.as_str() == marker);
    match book {
        Some(book) => debug!(id = %book.id, depth, "Resolved preview"),
        None => warn!(marker, "Preview marker does not match any book"),
    }
    book
}
