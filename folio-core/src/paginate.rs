//! Paginator
//!
//! Hands out fixed-size windows over a [`MatchSet`]. The first window
//! resets the cursor; each following window continues where the previous
//! one stopped, so windows never overlap and never skip a book.

use serde::Serialize;
use std::num::NonZeroUsize;
use tracing::debug;

use crate::catalog::Book;
use crate::filter::MatchSet;

/// Books per window when nothing else is configured
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(36) {
    Some(size) => size,
    None => unreachable!(),
};

/// One page worth of books plus how many are still hidden
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Window<'a> {
    pub items: Vec<&'a Book>,
    pub remaining: usize,
}

impl<'a> Window<'a> {
    fn empty() -> Self {
        Self {
            items: Vec::new(),
            remaining: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Page cursor over the current match set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
    page_index: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            page_index: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Number of windows handed out since the last reset (always >= 1)
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Books covered by the windows handed out so far
    fn shown(&self) -> usize {
        self.page_index.saturating_mul(self.page_size())
    }

    /// `max(0, |matches| - page_index * page_size)`
    pub fn remaining(&self, matches: &MatchSet<'_>) -> usize {
        matches.len().saturating_sub(self.shown())
    }

    /// Reset the cursor and return the first window
    pub fn first_window<'a>(&mut self, matches: &MatchSet<'a>) -> Window<'a> {
        self.page_index = 1;

        let end = matches.len().min(self.page_size());
        let window = Window {
            items: matches.as_slice()[..end].to_vec(),
            remaining: self.remaining(matches),
        };

        debug!(
            shown = window.items.len(),
            remaining = window.remaining,
            "First window"
        );
        window
    }

    /// Return the window after the last one handed out
    ///
    /// Once every match has been shown this returns an empty window with
    /// nothing remaining and leaves the cursor where it is.
    pub fn next_window<'a>(&mut self, matches: &MatchSet<'a>) -> Window<'a> {
        let start = self.shown();
        if start >= matches.len() {
            debug!(page_index = self.page_index, "No more windows");
            return Window::empty();
        }

        let end = matches.len().min(start + self.page_size());
        self.page_index += 1;

        let window = Window {
            items: matches.as_slice()[start..end].to_vec(),
            remaining: self.remaining(matches),
        };

        debug!(
            page_index = self.page_index,
            shown = window.items.len(),
            remaining = window.remaining,
            "Next window"
        );
        window
    }
}
