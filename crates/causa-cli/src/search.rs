//! # Search Subcommands
//!
//! `causa search` runs the filter engine over the catalog; `causa categories`
//! lists the category tabs a library page would render.

use anyhow::{Context, Result};
use clap::Args;

use causa_catalog::{filter, FilterCriteria, ALL_CATEGORIES};
use causa_core::{Entry, EntryKind};

use crate::config::CliConfig;

/// Arguments for the `causa search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query over title, description, and tags.
    #[arg(long, short, default_value = "")]
    pub query: String,

    /// Category tab to restrict to (`all` for every category).
    #[arg(long, short)]
    pub category: Option<String>,

    /// Entry kind to restrict to (resource, cause, region).
    #[arg(long, short)]
    pub kind: Option<EntryKind>,

    /// Print matches as JSON.
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new(&self.query);
        if let Some(category) = &self.category {
            criteria = criteria.with_category(category);
        }
        if let Some(kind) = self.kind {
            criteria = criteria.with_kind(kind);
        }
        criteria
    }
}

/// Execute the search subcommand.
pub fn run_search(args: &SearchArgs, config: &CliConfig) -> Result<u8> {
    let store = config.catalog()?;
    let criteria = args.criteria();
    let matches = filter(&store, &criteria);
    tracing::info!(
        query = %criteria.query,
        category = criteria.category.as_deref().unwrap_or(ALL_CATEGORIES),
        matches = matches.len(),
        "search complete"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&matches).context("failed to encode matches")?;
        println!("{json}");
        return Ok(0);
    }

    if matches.is_empty() {
        println!("No results found. Try adjusting your search or filters.");
        return Ok(0);
    }
    for entry in &matches {
        println!("{}", summary_line(entry));
    }
    println!("\n{} of {} entries", matches.len(), store.len());
    Ok(0)
}

/// Arguments for the `causa categories` subcommand.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Print categories as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Execute the categories subcommand.
pub fn run_categories(args: &CategoriesArgs, config: &CliConfig) -> Result<u8> {
    let store = config.catalog()?;
    let mut tabs = vec![ALL_CATEGORIES.to_string()];
    tabs.extend(store.categories());

    if args.json {
        println!("{}", serde_json::to_string(&tabs).context("failed to encode categories")?);
    } else {
        for tab in &tabs {
            println!("{tab}");
        }
    }
    Ok(0)
}

/// One-line listing: `id  [kind]  title (category) #tag #tag`.
pub(crate) fn summary_line(entry: &Entry) -> String {
    let mut line = format!("{:<10} [{}]  {}", entry.id.as_str(), entry.kind, entry.title);
    if let Some(category) = &entry.category {
        line.push_str(&format!(" ({category})"));
    }
    for tag in entry.tags.iter() {
        line.push_str(" #");
        line.push_str(tag);
    }
    line
}
