//! Application constants for Showroom
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain for maintainability and clarity.

use std::time::Duration;

/// Environment variable names
pub mod env {
    /// Environment variable overriding the chat collaborator base URL
    pub const CHAT_URL: &str = "SHOWROOM_CHAT_URL";
}

/// Currency conversion constants
///
/// Listing prices are stored in the base currency and normalized to the
/// display currency once, when the catalog is loaded. Every price that
/// leaves the loader (facet bounds, criteria bounds, rendered amounts) is
/// in the display currency.
pub mod currency {
    /// Fixed conversion rate from stored to display currency
    pub const CONVERSION_RATE: f64 = 4.5;

    /// ISO code of the currency the source data is stored in
    pub const BASE_CODE: &str = "USD";

    /// ISO code of the currency shown to users
    pub const DISPLAY_CODE: &str = "MYR";

    /// Prefix rendered before display-currency amounts, e.g. "RM 45,000"
    pub const DISPLAY_PREFIX: &str = "RM";
}

/// Catalog loading constants
pub mod catalog {
    use super::Duration;

    /// Simulated latency for a full-collection load
    pub const LOAD_ALL_DELAY: Duration = Duration::from_millis(300);

    /// Simulated latency for a single-listing lookup
    pub const LOOKUP_DELAY: Duration = Duration::from_millis(200);

    /// Jitter applied to simulated latency, as a fraction of the base delay
    pub const LATENCY_JITTER: f64 = 0.25;
}

/// Chat collaborator constants
pub mod chat {
    /// Default base URL of the remote chat endpoint
    pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/chat";

    /// Greeting shown when a conversation has no prior history
    pub const WELCOME_MESSAGE: &str = "Hello! How can I help you today?";

    /// Reply rendered locally when a message exchange fails
    pub const ERROR_REPLY: &str = "Sorry, there was an error processing your request.";

    /// Command that ends an interactive chat session
    pub const QUIT_COMMAND: &str = "/quit";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = "Showroom/0.1.0 (Vehicle Catalog Browser)";

    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Logging and debugging constants
pub mod logging {
    /// Default log level
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}

// Re-export commonly used constants for convenience
pub use catalog::{LATENCY_JITTER, LOAD_ALL_DELAY, LOOKUP_DELAY};
pub use chat::DEFAULT_BASE_URL as CHAT_BASE_URL;
pub use currency::{CONVERSION_RATE, DISPLAY_CODE, DISPLAY_PREFIX};
pub use env::CHAT_URL as ENV_CHAT_URL;
pub use http::{DEFAULT_TIMEOUT as HTTP_TIMEOUT, USER_AGENT};
