//! Catalog view state
//!
//! [`CatalogViewState`] owns everything that changes while a user browses:
//! the current match set, the page cursor and the selected book. Each
//! method handles one user event synchronously; nothing here runs in the
//! background.

use std::num::NonZeroUsize;
use tracing::{debug, info};

use crate::catalog::{Book, CatalogStore};
use crate::filter::{evaluate, FilterCriteria, MatchSet};
use crate::paginate::{Paginator, Window};
use crate::present::{BookDetail, Preview, ShowMore};
use crate::selection::{resolve, PreviewMarker};

#[derive(Debug, Clone)]
pub struct CatalogViewState<'a> {
    store: &'a CatalogStore,
    matches: MatchSet<'a>,
    paginator: Paginator,
    selection: Option<&'a Book>,
}

impl<'a> CatalogViewState<'a> {
    /// Start with the whole catalog as the match set
    pub fn new(store: &'a CatalogStore, page_size: NonZeroUsize) -> Self {
        Self {
            store,
            matches: MatchSet::all(store.books()),
            paginator: Paginator::new(page_size),
            selection: None,
        }
    }

    pub fn store(&self) -> &'a CatalogStore {
        self.store
    }

    /// First window of the current matches (initial page load)
    pub fn initial_window(&mut self) -> Window<'a> {
        self.paginator.first_window(&self.matches)
    }

    /// Run a search, replace the match set and return its first window
    ///
    /// The detail view is left alone; only the list changes.
    pub fn submit_search(&mut self, criteria: &FilterCriteria) -> Window<'a> {
        self.matches = evaluate(self.store.books(), criteria);
        info!(matches = self.matches.len(), "Search submitted");
        self.paginator.first_window(&self.matches)
    }

    /// Next window of the current matches
    pub fn show_more(&mut self) -> Window<'a> {
        self.paginator.next_window(&self.matches)
    }

    /// Open the detail view for the clicked preview
    ///
    /// A miss leaves the current selection untouched and returns `None`.
    pub fn select<N: PreviewMarker>(&mut self, path: &[N]) -> Option<&'a Book> {
        let book = resolve(path, self.store.books())?;
        self.selection = Some(book);
        Some(book)
    }

    /// Close the detail view
    pub fn close_detail(&mut self) {
        if let Some(book) = self.selection.take() {
            debug!(id = %book.id, "Closed detail view");
        }
    }

    pub fn selection(&self) -> Option<&'a Book> {
        self.selection
    }

    pub fn detail(&self) -> Option<BookDetail> {
        self.selection.map(|book| BookDetail::new(book, self.store))
    }

    pub fn matches(&self) -> &MatchSet<'a> {
        &self.matches
    }

    pub fn page_index(&self) -> usize {
        self.paginator.page_index()
    }

    pub fn show_more_state(&self) -> ShowMore {
        ShowMore::new(self.paginator.remaining(&self.matches))
    }

    /// True when the empty-state message should replace the list
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Preview records for a window
    pub fn previews(&self, window: &Window<'_>) -> Vec<Preview> {
        window
            .items
            .iter()
            .map(|book| Preview::new(book, self.store))
            .collect()
    }
}

#[cfg(test)]
mod view_tests {
    use super::*;
    use crate::selection::PathNode;

    const CATALOG: &str = r#"
authors:
  - id: a1
    name: Jane Austen
  - id: a2
    name: Charlotte Bronte
genres:
  - id: romance
    name: Romance
books:
  - id: b1
    title: Pride and Prejudice
    author: a1
    genres: [romance]
    published: "1813-01-28T00:00:00Z"
  - id: b2
    title: Emma
    author: a1
    genres: [romance]
    published: "1815-12-23T00:00:00Z"
  - id: b3
    title: Jane Eyre
    author: a2
    genres: [romance]
    published: "1847-10-16T00:00:00Z"
"#;

    fn page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_initial_window_covers_catalog() {
        let store = CatalogStore::from_yaml(CATALOG).unwrap();
        let mut view = CatalogViewState::new(&store, page(2));

        let window = view.initial_window();
        assert_eq!(window.items.len(), 2);
        assert_eq!(window.remaining, 1);
        assert_eq!(view.show_more_state(), ShowMore::new(1));
        assert!(!view.is_empty());
    }

    #[test]
    fn test_search_resets_cursor() {
        let store = CatalogStore::from_yaml(CATALOG).unwrap();
        let mut view = CatalogViewState::new(&store, page(1));

        view.initial_window();
        view.show_more();
        assert_eq!(view.page_index(), 2);

        let criteria = FilterCriteria::from_form("", "a1", "any");
        let window = view.submit_search(&criteria);
        assert_eq!(view.page_index(), 1);
        assert_eq!(view.matches().len(), 2);
        assert_eq!(window.items[0].title, "Pride and Prejudice");
        assert_eq!(window.remaining, 1);

        let rest = view.show_more();
        assert_eq!(rest.items[0].title, "Emma");
        assert!(!view.show_more_state().enabled);
    }

    #[test]
    fn test_empty_search() {
        let store = CatalogStore::from_yaml(CATALOG).unwrap();
        let mut view = CatalogViewState::new(&store, page(2));

        let window = view.submit_search(&FilterCriteria::default().with_title("moby"));
        assert!(window.is_empty());
        assert!(view.is_empty());
        assert!(!view.show_more_state().enabled);
    }

    #[test]
    fn test_select_and_close() {
        let store = CatalogStore::from_yaml(CATALOG).unwrap();
        let mut view = CatalogViewState::new(&store, page(2));

        let path = [PathNode::plain("h3"), PathNode::marked("button", "b3")];
        let book = view.select(&path).unwrap();
        assert_eq!(book.title, "Jane Eyre");

        let detail = view.detail().unwrap();
        assert_eq!(detail.subtitle, "Charlotte Bronte (1847)");

        // A miss keeps the current detail open
        assert!(view.select(&[PathNode::plain("div")]).is_none());
        assert_eq!(view.selection().unwrap().id.as_str(), "b3");

        view.close_detail();
        assert!(view.selection().is_none());
        assert!(view.detail().is_none());
    }

    #[test]
    fn test_search_keeps_selection() {
        let store = CatalogStore::from_yaml(CATALOG).unwrap();
        let mut view = CatalogViewState::new(&store, page(2));

        view.select(&[PathNode::marked("button", "b1")]);
        view.submit_search(&FilterCriteria::from_form("eyre", "any", "any"));
        assert_eq!(view.selection().unwrap().id.as_str(), "b1");
    }

    #[test]
    fn test_previews() {
        let store = CatalogStore::from_yaml(CATALOG).unwrap();
        let mut view = CatalogViewState::new(&store, page(3));

        let window = view.initial_window();
        let previews = view.previews(&window);
        assert_eq!(previews.len(), 3);
        assert_eq!(previews[2].author, "Charlotte Bronte");
    }
}
