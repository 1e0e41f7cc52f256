//! Command-line interface components
//!
//! This module contains CLI-specific code for the Showroom application,
//! including argument parsing, command handlers, and terminal rendering.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{BrowseArgs, ChatArgs, Cli, Commands, FacetsArgs, GlobalArgs, ShowArgs};
pub use commands::{handle_browse, handle_chat, handle_facets, handle_show};
pub use output::{
    display_active_criteria, display_facet_summary, display_listing_detail, display_listing_table,
    format_mileage, format_price,
};
