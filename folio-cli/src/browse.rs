//! Line-driven browsing session
//!
//! Mirrors the page interactions one command per line:
//!
//! ```text
//! search [title words] [author=<id>] [genre=<id>]   submit the search form
//! more                                              "Show more"
//! open <n>                                          click the n-th preview
//! close                                             close the detail view
//! help | quit
//! ```

use anyhow::Result;
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use tracing::debug;

use folio_core::filter::{FilterCriteria, ANY};
use folio_core::paginate::Window;
use folio_core::present::{Preview, EMPTY_STATE_MESSAGE};
use folio_core::selection::PathNode;
use folio_core::{CatalogStore, CatalogViewState};

use crate::catalog_cli::preview_table;

const HELP: &str = "\
Commands:
  search [title words] [author=<id>] [genre=<id>]
  more
  open <n>
  close
  help
  quit";

/// What the loop should do after a command
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Parse the arguments of a `search` line into criteria
fn parse_search(args: &str) -> FilterCriteria {
    let mut author = ANY;
    let mut genre = ANY;
    let mut title = Vec::new();

    for token in args.split_whitespace() {
        if let Some(value) = token.strip_prefix("author=") {
            author = value;
        } else if let Some(value) = token.strip_prefix("genre=") {
            genre = value;
        } else {
            title.push(token);
        }
    }

    FilterCriteria::from_form(&title.join(" "), author, genre)
}

/// Nodes a click on a rendered preview bubbles through, innermost first
fn interaction_path(preview: &Preview) -> Vec<PathNode> {
    vec![
        PathNode::plain("preview__title"),
        PathNode::plain("preview__info"),
        PathNode::marked("preview", preview.id.as_str()),
        PathNode::plain("list__items"),
    ]
}

pub struct BrowseSession<'a> {
    view: CatalogViewState<'a>,
    rendered: Vec<Preview>,
}

impl<'a> BrowseSession<'a> {
    pub fn new(store: &'a CatalogStore, page_size: NonZeroUsize) -> Self {
        Self {
            view: CatalogViewState::new(store, page_size),
            rendered: Vec::new(),
        }
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let window = self.view.initial_window();
        self.render_fresh(&window, out)?;

        for line in input.lines() {
            let line = line?;
            if self.handle(line.trim(), out)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let (command, args) = line.split_once(' ').unwrap_or((line, ""));
        debug!(command, args, "Browse command");

        match command {
            "" => {}
            "search" => {
                let criteria = parse_search(args);
                let window = self.view.submit_search(&criteria);
                self.render_fresh(&window, out)?;
            }
            "more" => {
                if self.view.show_more_state().enabled {
                    let window = self.view.show_more();
                    self.render_append(&window, out)?;
                } else {
                    writeln!(out, "Nothing more to show.")?;
                }
            }
            "open" => self.open(args.trim(), out)?,
            "close" => {
                self.view.close_detail();
                writeln!(out, "Closed.")?;
            }
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(out, "Unknown command '{other}'. Type 'help' for commands.")?,
        }

        Ok(Flow::Continue)
    }

    fn open<W: Write>(&mut self, arg: &str, out: &mut W) -> Result<()> {
        let Some(preview) = arg
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.rendered.get(i))
        else {
            writeln!(out, "No preview at position '{arg}'.")?;
            return Ok(());
        };

        let path = interaction_path(preview);
        if self.view.select(&path).is_none() {
            return Ok(());
        }

        if let Some(detail) = self.view.detail() {
            writeln!(out, "\n{}\n{}\n", detail.title, detail.subtitle)?;
            for line in detail.description.lines() {
                writeln!(out, "  {line}")?;
            }
        }
        Ok(())
    }

    /// Replace the rendered list with a first window
    fn render_fresh<W: Write>(&mut self, window: &Window<'a>, out: &mut W) -> Result<()> {
        self.rendered.clear();

        if self.view.is_empty() {
            writeln!(out, "{EMPTY_STATE_MESSAGE}")?;
            return Ok(());
        }
        self.render_append(window, out)
    }

    /// Append a window to the rendered list
    fn render_append<W: Write>(&mut self, window: &Window<'a>, out: &mut W) -> Result<()> {
        let previews = self.view.previews(window);
        let first_position = self.rendered.len() + 1;

        writeln!(out, "{}", preview_table(&previews, first_position))?;
        self.rendered.extend(previews);

        let show_more = self.view.show_more_state();
        if show_more.enabled {
            writeln!(out, "{}", show_more.label())?;
        }
        Ok(())
    }
}
