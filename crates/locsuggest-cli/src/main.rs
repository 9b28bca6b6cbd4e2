//! locsuggest — Command-line interface for locsuggest-core
//!
//! This binary exercises the suggestion sources from your terminal: free-text
//! location search, the curated popular list, and index statistics.
//!
//! Usage examples
//! --------------
//!
//! - Search the bundled index
//!   $ locsuggest search berlin
//!
//! - Search a custom dataset
//!   $ locsuggest --input ./locations.json.gz search "sao paulo"
//!
//! - Search a remote geo API instead of the local index
//!   $ locsuggest --url https://example.com search paris
//!
//! - List popular locations
//!   $ locsuggest popular --limit 5
//!
//! - Show index statistics
//!   $ locsuggest stats
//!
//! Data source
//! -----------
//!
//! By default the CLI searches the dataset bundled with `locsuggest-core`.
//! Use `--input <path>` to load a custom `.json`/`.json.gz` dataset (a binary
//! cache is written next to it for fast subsequent runs) or `--url <base>` to
//! query a remote geo API over HTTP.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::bail;
use clap::Parser;
use locsuggest_core::{GeoIndex, LocationKind, LocationSuggestion, SuggestionSource};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let source: Box<dyn SuggestionSource> = if let Some(url) = &args.url {
        #[cfg(feature = "remote")]
        {
            Box::new(locsuggest_core::RemoteGeo::new(url.clone())?)
        }
        #[cfg(not(feature = "remote"))]
        {
            let _ = url;
            bail!("--url requires the 'remote' feature");
        }
    } else {
        Box::new(load_index(args.input.as_deref())?)
    };

    match args.command {
        Commands::Search { query, limit } => {
            let matches = source.search(&query, limit)?;
            if matches.is_empty() {
                println!("No locations found matching: {query}");
            } else {
                for s in matches {
                    println!("{}", format_suggestion(&s));
                }
            }
        }

        Commands::Popular { limit } => {
            for s in source.popular(limit)? {
                println!("{}", format_suggestion(&s));
            }
        }

        Commands::Stats => {
            if args.url.is_some() {
                bail!("stats is only available for local datasets");
            }
            let index = load_index(args.input.as_deref())?;
            let stats = index.stats();
            println!("Index statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Countries: {}", stats.countries);
            println!("  Regions: {}", stats.regions);
        }
    }

    Ok(())
}

fn load_index(input: Option<&str>) -> anyhow::Result<GeoIndex> {
    let index = match input {
        Some(path) => GeoIndex::load_from_path(path)?,
        None => GeoIndex::bundled()?,
    };
    Ok(index)
}

fn format_suggestion(s: &LocationSuggestion) -> String {
    let kind = match s.kind {
        LocationKind::City => "city",
        LocationKind::Country => "country",
        LocationKind::Region => "region",
    };
    match &s.region {
        Some(region) => format!("{} [{kind}] — {region}", s.display),
        None => format!("{} [{kind}]", s.display),
    }
}
