//! Command handlers for Showroom CLI operations
//!
//! This module implements the main command handlers that coordinate
//! between CLI arguments and the core application functionality: loading
//! the catalog, narrowing it with filter criteria, rendering results,
//! and driving chat sessions.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::app::catalog::CatalogStore;
use crate::app::chat::{ChatClient, ChatMessage, Role};
use crate::app::facets::FacetSummary;
use crate::app::filter::FilterCriteria;
use crate::app::models::Listing;
use crate::app::query::search;
use crate::cli::args::{BrowseArgs, ChatArgs, FacetsArgs, GlobalArgs, ShowArgs};
use crate::cli::output;
use crate::config::AppConfig;
use crate::constants::chat::{ERROR_REPLY, QUIT_COMMAND, WELCOME_MESSAGE};
use crate::errors::{AppError, ChatResult, Result};

/// Handle the browse command
///
/// Loads the catalog, seeds filter criteria from its facets, applies the
/// requested narrowing, and renders the matching listings.
pub async fn handle_browse(global: &GlobalArgs, args: BrowseArgs) -> Result<()> {
    // Validate browse arguments
    args.validate().map_err(AppError::generic)?;

    let store = build_catalog_store(global).await?;

    // Create progress spinner for the catalog load
    use indicatif::{ProgressBar, ProgressStyle};
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["◐", "◓", "◑", "◒"]),
    );
    spinner.set_message("Loading catalog...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));

    let listings = store.load_all().await?;
    spinner.finish_and_clear();

    let facets = FacetSummary::from_listings(&listings);
    let criteria = criteria_from_args(&facets, &args);

    info!("Searching {} listings", listings.len());
    let results = search(&listings, &criteria);

    if results.is_empty() {
        println!("🔍 No listings match the current filters.");
        output::display_active_criteria(&criteria);
        println!("   Try widening the year or price range, or clearing the search term.");
        return Ok(());
    }

    if args.is_filtered() {
        println!("🔍 {} of {} listings match", results.len(), listings.len());
    } else {
        println!("🚗 {} listings in the catalog", results.len());
    }
    println!();

    let shown = truncate_results(&results, args.limit);
    if args.detailed {
        for (i, listing) in shown.iter().enumerate() {
            if i > 0 {
                println!();
            }
            output::display_listing_detail(listing);
        }
    } else {
        output::display_listing_table(shown);
    }

    if shown.len() < results.len() {
        println!();
        println!("{}", output::format_overflow_notice(results.len() - shown.len()));
    }

    Ok(())
}

/// Handle the show command
///
/// Looks up a single listing by id. A missing listing is reported to the
/// user but is not a command failure; only a broken catalog source is.
pub async fn handle_show(global: &GlobalArgs, args: ShowArgs) -> Result<()> {
    let store = build_catalog_store(global).await?;

    // Create progress spinner for the lookup
    use indicatif::{ProgressBar, ProgressStyle};
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["◐", "◓", "◑", "◒"]),
    );
    spinner.set_message(format!("Looking up listing {}...", args.id));
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));

    let listing = store.load_by_id(args.id).await?;
    spinner.finish_and_clear();

    match listing {
        Some(listing) => output::display_listing_detail(&listing),
        None => {
            println!("🔍 Listing {} was not found in the catalog.", args.id);
            println!("   Run 'showroom browse' to see what is available.");
        }
    }

    Ok(())
}

/// Handle the facets command
pub async fn handle_facets(global: &GlobalArgs, args: FacetsArgs) -> Result<()> {
    let store = build_catalog_store(global).await?;

    // Create progress spinner for the catalog load
    use indicatif::{ProgressBar, ProgressStyle};
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["◐", "◓", "◑", "◒"]),
    );
    spinner.set_message("Summarizing catalog...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));

    let listings = store.load_all().await?;
    spinner.finish_and_clear();

    let facets = FacetSummary::from_listings(&listings);

    if args.json {
        let rendered = serde_json::to_string_pretty(&facets)
            .map_err(|e| AppError::generic(format!("Failed to render facets as JSON: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("📊 Catalog Facets");
    println!("=================");
    output::display_facet_summary(&facets);
    println!();
    println!("{} listings in the catalog", listings.len());

    Ok(())
}

/// Handle the chat command
///
/// Starts (or resumes) a thread against the chat endpoint and either
/// sends a single message or runs an interactive session.
pub async fn handle_chat(global: &GlobalArgs, args: ChatArgs) -> Result<()> {
    let config = AppConfig::load(global.config.clone()).await?;
    let (_, mut chat_config) = config.to_runtime_config();

    if let Some(endpoint) = args.endpoint {
        chat_config.base_url = endpoint;
    }

    let client = ChatClient::new(&chat_config)?;
    info!("Chat endpoint: {}", client.endpoint());

    let thread_id = match args.resume {
        Some(thread_id) => thread_id,
        None => client.start_chat().await?,
    };

    if let Some(message) = args.message {
        let reply = client.send_message(&thread_id, &message).await?;
        println!("{}", reply);
        return Ok(());
    }

    run_chat_session(&client, &thread_id).await
}

/// Drive an interactive chat session until /quit or end of input
async fn run_chat_session(client: &ChatClient, thread_id: &str) -> Result<()> {
    println!("💬 Showroom Chat Support");
    println!("   Connected to {}", client.endpoint());
    println!("   Thread {} (type {} to leave)", thread_id, QUIT_COMMAND);
    println!();

    // Replay the transcript, or greet on a fresh thread
    let history = client.history(thread_id).await?;
    for message in opening_transcript(history) {
        print_chat_line(message.role, &message.content);
    }

    let interactive = atty::is(atty::Stream::Stdin);
    loop {
        let line = match read_user_line(interactive)? {
            Some(line) => line,
            None => break,
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == QUIT_COMMAND {
            break;
        }

        if !interactive {
            // Echo piped input so transcripts stay readable
            print_chat_line(Role::User, line);
        }

        // A failed exchange apologizes and keeps the session alive
        let reply = reply_line(client.send_message(thread_id, line).await);
        print_chat_line(Role::System, &reply);
    }

    println!();
    println!("👋 Chat session ended.");
    Ok(())
}

/// Opening lines of a session: the stored transcript, or a greeting when
/// the thread has no history yet
fn opening_transcript(history: Vec<ChatMessage>) -> Vec<ChatMessage> {
    if history.is_empty() {
        vec![ChatMessage {
            role: Role::System,
            content: WELCOME_MESSAGE.to_string(),
        }]
    } else {
        history
    }
}

/// Transcript line for one exchange outcome: the reply on success, a
/// local apology on failure so the session stays alive
fn reply_line(outcome: ChatResult<String>) -> String {
    match outcome {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Chat request failed: {}", e);
            ERROR_REPLY.to_string()
        }
    }
}

/// Load configuration and build the catalog store used by read commands
async fn build_catalog_store(global: &GlobalArgs) -> Result<CatalogStore> {
    let config = AppConfig::load(global.config.clone()).await?;
    let (mut catalog_config, _) = config.to_runtime_config();

    if let Some(ref path) = global.catalog {
        catalog_config.source = Some(path.clone());
    }

    Ok(CatalogStore::new(catalog_config))
}

/// Seed criteria from the facets and apply the browse flags in order
fn criteria_from_args(facets: &FacetSummary, args: &BrowseArgs) -> FilterCriteria {
    let mut criteria = FilterCriteria::seeded(facets);
    for update in args.criteria_updates() {
        criteria.apply(update);
    }
    criteria
}

/// Cap the displayed results without mutating the full result set
fn truncate_results(results: &[Listing], limit: Option<usize>) -> &[Listing] {
    match limit {
        Some(limit) if limit < results.len() => &results[..limit],
        _ => results,
    }
}

fn print_chat_line(role: Role, content: &str) {
    println!("{}> {}", output::chat_label(role), content);
}

/// Prompt for one line of input, or `None` once input is exhausted
fn read_user_line(interactive: bool) -> Result<Option<String>> {
    if interactive {
        print!("You> ");
        io::stdout().flush().map_err(AppError::Io)?;
    }

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input).map_err(AppError::Io)?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::chat::ChatConfig;
    use crate::app::facets::Bounds;
    use crate::errors::ChatError;

    fn facets() -> FacetSummary {
        FacetSummary {
            makes: vec!["Toyota".to_string(), "Honda".to_string()],
            years: Bounds {
                min: 2015,
                max: 2023,
            },
            prices: Bounds {
                min: 30_000.0,
                max: 250_000.0,
            },
        }
    }

    fn listing(id: u32) -> Listing {
        Listing {
            id,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            price: 90_000.0,
            color: "Silver".to_string(),
            mileage: 20_000,
            fuel_type: "gasoline".to_string(),
            transmission: "automatic".to_string(),
            description: "Test listing".to_string(),
            features: Vec::new(),
            image_url: "/images/cars/test.jpg".to_string(),
        }
    }

    #[test]
    fn test_criteria_from_args_applies_flags_over_seed() {
        let args = BrowseArgs {
            make: Some("Honda".to_string()),
            min_price: Some(50_000.0),
            ..BrowseArgs::default()
        };

        let criteria = criteria_from_args(&facets(), &args);
        assert_eq!(criteria.make, Some("Honda".to_string()));
        assert_eq!(criteria.min_price, 50_000.0);

        // Untouched fields keep their facet-derived values
        assert_eq!(criteria.min_year, 2015);
        assert_eq!(criteria.max_year, 2023);
        assert_eq!(criteria.max_price, 250_000.0);
        assert!(criteria.query.is_empty());
    }

    #[test]
    fn test_truncate_results_caps_display_only() {
        let results: Vec<Listing> = (1..=4).map(listing).collect();

        assert_eq!(truncate_results(&results, None).len(), 4);
        assert_eq!(truncate_results(&results, Some(10)).len(), 4);

        let capped = truncate_results(&results, Some(2));
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[0].id, 1);
        assert_eq!(capped[1].id, 2);
    }

    #[test]
    fn test_opening_transcript_greets_fresh_thread() {
        let lines = opening_transcript(Vec::new());

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].role, Role::System);
        assert_eq!(lines[0].content, WELCOME_MESSAGE);
    }

    #[test]
    fn test_opening_transcript_replays_stored_history() {
        let history = vec![
            ChatMessage {
                role: Role::User,
                content: "Do you have hybrids?".to_string(),
            },
            ChatMessage {
                role: Role::System,
                content: "We have one Prius in stock.".to_string(),
            },
        ];

        // A resumed thread shows the transcript as stored, no greeting
        assert_eq!(opening_transcript(history.clone()), history);
    }

    #[test]
    fn test_reply_line_returns_support_reply() {
        let reply = reply_line(Ok("The Corolla is still available.".to_string()));
        assert_eq!(reply, "The Corolla is still available.");
    }

    #[test]
    fn test_reply_line_apologizes_on_error() {
        let reply = reply_line(Err(ChatError::MissingThread));
        assert_eq!(reply, ERROR_REPLY);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_maps_to_apology() {
        // Nothing listens on the discard port, so the send fails fast
        let config = ChatConfig {
            base_url: "http://127.0.0.1:9/api/chat".to_string(),
            ..ChatConfig::default()
        };
        let client = ChatClient::new(&config).unwrap();

        let outcome = client.send_message("thread-1", "hello").await;
        assert!(outcome.is_err());
        assert_eq!(reply_line(outcome), ERROR_REPLY);
    }
}
