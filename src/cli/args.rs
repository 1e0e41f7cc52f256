//! Command-line argument parsing for Showroom
//!
//! This module defines the CLI structure using clap derive macros,
//! providing a user-friendly interface for browsing the catalog,
//! inspecting individual listings, summarizing facets, and talking to
//! the chat collaborator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::filter::CriteriaUpdate;

/// Showroom - Browse the vehicle listing catalog
#[derive(Parser, Debug)]
#[command(
    name = "showroom",
    version,
    about = "Browse and search the vehicle listing catalog",
    long_about = "A command-line browser for the showroom vehicle catalog.
Supports faceted searching by make, year, price, and free text, plus a chat
assistant for listing questions."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog snapshot path (overrides the bundled snapshot)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse listings matching the given filters
    Browse(BrowseArgs),

    /// Show full details for one listing
    Show(ShowArgs),

    /// Summarize catalog facets (makes, year range, price range)
    Facets(FacetsArgs),

    /// Talk to the chat assistant
    Chat(ChatArgs),
}

/// Arguments for the browse command
#[derive(Args, Debug, Clone, Default)]
pub struct BrowseArgs {
    /// Only show listings from this make (exact match, e.g. "Toyota")
    #[arg(short, long)]
    pub make: Option<String>,

    /// Earliest model year to include
    #[arg(long, value_name = "YEAR")]
    pub min_year: Option<i32>,

    /// Latest model year to include
    #[arg(long, value_name = "YEAR")]
    pub max_year: Option<i32>,

    /// Lowest price to include (display currency)
    #[arg(long, value_name = "PRICE")]
    pub min_price: Option<f64>,

    /// Highest price to include (display currency)
    #[arg(long, value_name = "PRICE")]
    pub max_price: Option<f64>,

    /// Free-text term matched against the descriptive fields
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Maximum number of listings to display
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Show the full detail block for each result
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the show command
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Listing identifier
    #[arg(value_name = "ID")]
    pub id: u32,
}

/// Arguments for the facets command
#[derive(Args, Debug, Clone, Default)]
pub struct FacetsArgs {
    /// Emit the summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the chat command
#[derive(Args, Debug, Clone, Default)]
pub struct ChatArgs {
    /// Chat endpoint URL (overrides config and environment)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Resume an existing thread instead of starting a new one
    #[arg(long, value_name = "THREAD")]
    pub resume: Option<String>,

    /// Send a single message and print the reply instead of starting a session
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}

impl BrowseArgs {
    /// Reject flag combinations that cannot produce useful output
    pub fn validate(&self) -> Result<(), String> {
        if self.limit == Some(0) {
            return Err("Result limit must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Translate the provided flags into criteria updates
    ///
    /// Absent flags produce no update, so the seeded criteria keep their
    /// facet-derived values for those fields.
    pub fn criteria_updates(&self) -> Vec<CriteriaUpdate> {
        let mut updates = Vec::new();

        if let Some(ref make) = self.make {
            updates.push(CriteriaUpdate::Make(Some(make.clone())));
        }
        if let Some(year) = self.min_year {
            updates.push(CriteriaUpdate::MinYear(year));
        }
        if let Some(year) = self.max_year {
            updates.push(CriteriaUpdate::MaxYear(year));
        }
        if let Some(price) = self.min_price {
            updates.push(CriteriaUpdate::MinPrice(price));
        }
        if let Some(price) = self.max_price {
            updates.push(CriteriaUpdate::MaxPrice(price));
        }
        if let Some(ref term) = self.search {
            updates.push(CriteriaUpdate::Query(term.clone()));
        }

        updates
    }

    /// Check if this browse narrows the catalog (specific criteria)
    pub fn is_filtered(&self) -> bool {
        self.make.is_some()
            || self.min_year.is_some()
            || self.max_year.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.search.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_args_validation() {
        let mut args = BrowseArgs::default();

        // Valid configuration
        assert!(args.validate().is_ok());

        // Invalid: zero limit
        args.limit = Some(0);
        assert!(args.validate().is_err());

        // Valid again with a positive limit
        args.limit = Some(5);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_criteria_updates_mapping() {
        let args = BrowseArgs {
            make: Some("Toyota".to_string()),
            min_year: Some(2018),
            search: Some("hybrid".to_string()),
            ..BrowseArgs::default()
        };

        let updates = args.criteria_updates();
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0], CriteriaUpdate::Make(Some("Toyota".to_string())));
        assert_eq!(updates[1], CriteriaUpdate::MinYear(2018));
        assert_eq!(updates[2], CriteriaUpdate::Query("hybrid".to_string()));
    }

    #[test]
    fn test_unfiltered_browse_produces_no_updates() {
        let args = BrowseArgs::default();
        assert!(args.criteria_updates().is_empty());
        assert!(!args.is_filtered());
    }

    #[test]
    fn test_filtering_detection() {
        let base_args = BrowseArgs::default();
        assert!(!base_args.is_filtered());

        let make_args = BrowseArgs {
            make: Some("Honda".to_string()),
            ..base_args.clone()
        };
        assert!(make_args.is_filtered());

        let price_args = BrowseArgs {
            max_price: Some(120_000.0),
            ..base_args.clone()
        };
        assert!(price_args.is_filtered());

        // Limit alone shortens the display without narrowing the search
        let limit_args = BrowseArgs {
            limit: Some(3),
            ..base_args
        };
        assert!(!limit_args.is_filtered());
    }

    #[test]
    fn test_log_level() {
        let cli_quiet = Cli {
            global: GlobalArgs {
                verbose: false,
                very_verbose: false,
                quiet: true,
                config: None,
                catalog: None,
            },
            command: Commands::Facets(FacetsArgs::default()),
        };

        let cli_verbose = Cli {
            global: GlobalArgs {
                verbose: true,
                very_verbose: false,
                quiet: false,
                config: None,
                catalog: None,
            },
            command: Commands::Facets(FacetsArgs::default()),
        };

        assert_eq!(cli_quiet.log_level(), tracing::Level::ERROR);
        assert_eq!(cli_verbose.log_level(), tracing::Level::INFO);
    }
}
