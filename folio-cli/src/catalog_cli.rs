//! Folio catalog CLI commands
//!
//! One-shot commands over the catalog view state: search with paging,
//! the detail view of a single book, and the filter option lists.

use anyhow::{Context, Result};
use clap::Args;
use std::num::NonZeroUsize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use folio_core::filter::{FilterCriteria, FilterOption, ANY};
use folio_core::present::{Preview, EMPTY_STATE_MESSAGE};
use folio_core::selection::PathNode;
use folio_core::{CatalogStore, CatalogViewState};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Title query (case-insensitive substring; empty matches all)
    #[clap(long, default_value = "")]
    pub title: String,

    /// Author id or "any"
    #[clap(long, default_value = ANY)]
    pub author: String,

    /// Genre id or "any"
    #[clap(long, default_value = ANY)]
    pub genre: String,

    /// Number of windows to print
    #[clap(long, default_value_t = 1)]
    pub pages: usize,

    /// Output results as JSON
    #[clap(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_form(&self.title, &self.author, &self.genre)
    }
}

/// Table row for previews
#[derive(Tabled)]
pub struct PreviewRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
}

/// Render previews as a table, numbering from `first_position`
pub fn preview_table(previews: &[Preview], first_position: usize) -> String {
    let rows: Vec<PreviewRow> = previews
        .iter()
        .enumerate()
        .map(|(i, preview)| PreviewRow {
            position: first_position + i,
            id: preview.id.clone(),
            title: truncate(&preview.title, 50),
            author: preview.author.clone(),
        })
        .collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

pub fn execute_search(
    store: &CatalogStore,
    page_size: NonZeroUsize,
    args: &SearchArgs,
) -> Result<()> {
    let mut view = CatalogViewState::new(store, page_size);
    let criteria = args.criteria();

    let first = view.submit_search(&criteria);
    let mut previews = view.previews(&first);
    for _ in 1..args.pages {
        if !view.show_more_state().enabled {
            break;
        }
        let window = view.show_more();
        previews.extend(view.previews(&window));
    }

    let show_more = view.show_more_state();

    if args.json {
        let output = serde_json::json!({
            "criteria": criteria,
            "matches": view.matches().len(),
            "items": previews,
            "show_more": show_more,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if view.is_empty() {
        println!("{EMPTY_STATE_MESSAGE}");
        return Ok(());
    }

    println!("Found {} book(s):\n", view.matches().len());
    println!("{}", preview_table(&previews, 1));

    if show_more.enabled {
        println!("\n{}", show_more.label());
    }

    Ok(())
}

pub fn execute_show(
    store: &CatalogStore,
    page_size: NonZeroUsize,
    id: &str,
    json: bool,
) -> Result<()> {
    let mut view = CatalogViewState::new(store, page_size);

    let detail = view
        .select(&[PathNode::marked("preview", id)])
        .and_then(|_| view.detail())
        .with_context(|| format!("Book '{id}' not found in catalog"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!();
    println!("{}", detail.title);
    println!("{}", detail.subtitle);
    if !detail.image.is_empty() {
        println!("Cover: {}", detail.image);
    }
    println!();
    for line in detail.description.lines() {
        println!("  {line}");
    }

    Ok(())
}

/// Table row for filter options
#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Label")]
    label: String,
}

fn option_table(options: &[FilterOption]) -> String {
    let rows: Vec<OptionRow> = options
        .iter()
        .map(|o| OptionRow {
            value: o.value.clone(),
            label: o.label.clone(),
        })
        .collect();

    Table::new(&rows).with(Style::rounded()).to_string()
}

pub fn execute_options(store: &CatalogStore, json: bool) -> Result<()> {
    let authors = store.author_options();
    let genres = store.genre_options();

    if json {
        let output = serde_json::json!({
            "authors": authors,
            "genres": genres,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Authors:\n{}", option_table(&authors));
    println!("\nGenres:\n{}", option_table(&genres));

    Ok(())
}
