//! # Regions Subcommand
//!
//! The world map as text: every region with its issue count, or a single
//! region's issues and initiatives. `--initiative` narrows initiatives by
//! name across one or all regions.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use causa_catalog::{CatalogStore, Coordinates, RegionView};
use causa_core::{CatalogError, EntryKind};

use crate::config::CliConfig;

/// Arguments for the `causa regions` subcommand.
#[derive(Args, Debug)]
pub struct RegionsArgs {
    /// Region identifier; every region when omitted.
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Only initiatives whose name contains this text.
    #[arg(long, short)]
    pub initiative: Option<String>,

    /// Print regions as JSON.
    #[arg(long)]
    pub json: bool,
}

/// One region as printed by the subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionReport<'a> {
    /// Region identifier.
    pub id: &'a str,
    /// Region name.
    pub name: &'a str,
    /// Map marker position.
    pub coordinates: Option<Coordinates>,
    /// Issues in the region.
    pub issues: Vec<&'a str>,
    /// Initiatives, narrowed by the initiative query when one is given.
    pub initiatives: Vec<String>,
}

/// Collect the regions to report.
///
/// With an initiative query and no region id, regions without a matching
/// initiative are left out.
pub fn region_reports<'a>(
    store: &'a CatalogStore,
    id: Option<&str>,
    initiative: Option<&str>,
) -> Result<Vec<RegionReport<'a>>> {
    let entries: Vec<_> = match id {
        Some(id) => {
            let entry = store.by_id(id)?;
            if entry.kind != EntryKind::Region {
                return Err(CatalogError::NotFound { id: id.to_string() })
                    .with_context(|| format!("\"{id}\" is a {}, not a region", entry.kind));
            }
            vec![entry]
        }
        None => store.of_kind(EntryKind::Region).collect(),
    };

    let mut reports = Vec::with_capacity(entries.len());
    for entry in entries {
        let view = RegionView::from_entry(entry)?;
        let initiatives: Vec<String> = match initiative {
            Some(query) => view
                .initiatives_matching(query)
                .into_iter()
                .map(str::to_string)
                .collect(),
            None => view.initiatives.clone(),
        };
        if id.is_none() && initiative.is_some() && initiatives.is_empty() {
            continue;
        }
        reports.push(RegionReport {
            id: entry.id.as_str(),
            name: entry.title.as_str(),
            coordinates: view.coordinates.clone(),
            issues: view.issues().collect(),
            initiatives,
        });
    }
    tracing::debug!(regions = reports.len(), "collected regions");
    Ok(reports)
}

/// Execute the regions subcommand.
pub fn run_regions(args: &RegionsArgs, config: &CliConfig) -> Result<u8> {
    let store = config.catalog()?;
    let reports = region_reports(&store, args.id.as_deref(), args.initiative.as_deref())?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("failed to encode regions")?
        );
        return Ok(0);
    }

    if reports.is_empty() {
        println!("No initiatives found.");
        return Ok(0);
    }
    let detailed = args.id.is_some() || args.initiative.is_some();
    for report in &reports {
        if !detailed {
            println!(
                "{:<15} {} ({} issues, {} initiatives)",
                report.id,
                report.name,
                report.issues.len(),
                report.initiatives.len()
            );
            continue;
        }
        println!("{}", report.name);
        if args.id.is_some() {
            println!("Key issues:");
            for issue in &report.issues {
                println!("  - {issue}");
            }
        }
        println!("Active initiatives:");
        for initiative in &report.initiatives {
            println!("  - {initiative}");
        }
    }
    Ok(0)
}
