//! # Show Subcommand
//!
//! Prints one entry with the details its kind carries: publication date and
//! reading time for resources, needed skills and organizations for causes,
//! issues and initiatives for regions.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::Args;

use causa_catalog::{CauseView, RegionView, ResourceView};
use causa_core::{Entry, EntryKind};

use crate::config::CliConfig;

/// Arguments for the `causa show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Entry identifier.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Print the raw entry as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the show subcommand.
pub fn run_show(args: &ShowArgs, config: &CliConfig) -> Result<u8> {
    let store = config.catalog()?;
    let entry = store.by_id(&args.id)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(entry).context("failed to encode entry")?
        );
    } else {
        print!("{}", render(entry)?);
    }
    Ok(0)
}

fn render(entry: &Entry) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{} [{}]", entry.title, entry.kind)?;
    if let Some(category) = &entry.category {
        writeln!(out, "Category: {category}")?;
    }
    if !entry.description.is_empty() {
        writeln!(out, "\n{}\n", entry.description)?;
    }

    match entry.kind {
        EntryKind::Resource => {
            let view = ResourceView::from_entry(entry)?;
            if let Some(date) = view.display_date() {
                writeln!(out, "Published: {date}")?;
            }
            if let Some(read_time) = &view.read_time {
                writeln!(out, "Reading time: {read_time}")?;
            }
            list(&mut out, "Tags", entry.tags.iter())?;
        }
        EntryKind::Cause => {
            let view = CauseView::from_entry(entry)?;
            list(&mut out, "Tags", entry.tags.iter())?;
            list(&mut out, "Skills needed", view.skills.iter().map(String::as_str))?;
            list(
                &mut out,
                "Organizations",
                view.organizations.iter().map(|o| o.name.as_str()),
            )?;
        }
        EntryKind::Region => {
            let view = RegionView::from_entry(entry)?;
            list(&mut out, "Key issues", view.issues())?;
            list(
                &mut out,
                "Active initiatives",
                view.initiatives.iter().map(String::as_str),
            )?;
        }
    }
    Ok(out)
}

fn list<'a>(out: &mut String, heading: &str, items: impl Iterator<Item = &'a str>) -> Result<()> {
    let items: Vec<&str> = items.collect();
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "{heading}:")?;
    for item in items {
        writeln!(out, "  - {item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use causa_catalog::seed;

    #[test]
    fn renders_resource_details() {
        let store = seed::catalog().unwrap();
        let out = render(store.by_id("1").unwrap()).unwrap();
        assert!(out.starts_with("Understanding Climate Justice [resource]\n"));
        assert!(out.contains("Published: May 15, 2023"));
        assert!(out.contains("Reading time: 8 min read"));
    }

    #[test]
    fn renders_cause_organizations() {
        let store = seed::catalog().unwrap();
        let out = render(store.by_id("cause-2").unwrap()).unwrap();
        assert!(out.contains("Organizations:\n  - Electronic Frontier Foundation"));
        assert!(out.contains("Skills needed:\n  - Programming"));
    }

    #[test]
    fn unknown_id_fails() {
        let args = ShowArgs {
            id: "missing".into(),
            json: false,
        };
        let err = run_show(&args, &CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
