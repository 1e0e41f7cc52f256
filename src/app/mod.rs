//! Core application logic for Showroom
//!
//! This module contains the catalog store, the filter and facet types,
//! the pure query engine, and the chat collaborator client.
//!
//! # Examples
//!
//! ```rust,no_run
//! use showroom::app::{CatalogStore, FacetSummary, FilterCriteria, search};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load the bundled catalog snapshot
//! let store = CatalogStore::with_defaults();
//! let listings = store.load_all().await?;
//!
//! // Seed criteria from the collection facets, then narrow them
//! let facets = FacetSummary::from_listings(&listings);
//! let mut criteria = FilterCriteria::seeded(&facets);
//! criteria.query = "hybrid".to_string();
//!
//! for listing in search(&listings, &criteria) {
//!     println!("{}", listing.title());
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod chat;
pub mod facets;
pub mod filter;
pub mod models;
pub mod query;

// Re-export main public API
pub use catalog::{CatalogConfig, CatalogStore};
pub use chat::{ChatClient, ChatConfig, ChatMessage, Role};
pub use facets::{Bounds, FacetSummary, distinct_makes, price_bounds, year_bounds};
pub use filter::{CriteriaUpdate, FilterCriteria};
pub use models::Listing;
pub use query::search;
