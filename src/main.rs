//! Showroom CLI application
//!
//! Command-line interface for browsing the showroom vehicle catalog.
//! Features faceted searching, single-listing lookup, and a chat
//! assistant session.

use std::process;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

// Import CLI modules through the library (module is public but not re-exported)
use showroom::cli::{Cli, Commands, handle_browse, handle_chat, handle_facets, handle_show};
use showroom::errors::Result;

#[tokio::main]
async fn main() {
    // Initialize program
    let result = run().await;

    // Handle any errors that occurred
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok(); // Ignore errors if file doesn't exist

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize logging based on verbosity
    init_logging(&cli);

    info!("Showroom v{} starting", env!("CARGO_PKG_VERSION"));

    // Execute the appropriate command
    match cli.command {
        Commands::Browse(args) => {
            info!("Executing browse command");
            handle_browse(&cli.global, args).await
        }
        Commands::Show(args) => {
            info!("Executing show command");
            handle_show(&cli.global, args).await
        }
        Commands::Facets(args) => {
            info!("Executing facets command");
            handle_facets(&cli.global, args).await
        }
        Commands::Chat(args) => {
            info!("Executing chat command");
            handle_chat(&cli.global, args).await
        }
    }
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    // Create environment filter
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("showroom={}", log_level).parse().unwrap());

    // Initialize subscriber
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose) // Show levels only in very verbose mode
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}
