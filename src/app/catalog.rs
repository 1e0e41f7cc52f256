//! Asynchronous catalog loading with simulated source latency
//!
//! The catalog behaves like a remote inventory service backed by a local
//! snapshot: every call pays a small randomized delay before returning,
//! but the snapshot itself is parsed and validated exactly once and then
//! shared behind an `Arc`. Listing prices are normalized from the base
//! currency into the display currency at load time, so facets, criteria,
//! and the query engine all operate on a single unit.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::OnceCell;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::app::models::Listing;
use crate::constants::{catalog, currency};
use crate::errors::{CatalogError, CatalogResult};

/// Catalog snapshot bundled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../../data/cars.json");

/// Tunable behavior for a [`CatalogStore`]
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Snapshot file to read, or `None` for the embedded snapshot
    pub source: Option<PathBuf>,
    /// Base delay simulated by a full collection load
    pub load_all_delay: Duration,
    /// Base delay simulated by a single-listing lookup
    pub lookup_delay: Duration,
    /// Fraction of the base delay used as the jitter half-range
    pub latency_jitter: f64,
    /// Multiplier from base-currency prices to display-currency prices
    pub conversion_rate: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: None,
            load_all_delay: catalog::LOAD_ALL_DELAY,
            lookup_delay: catalog::LOOKUP_DELAY,
            latency_jitter: catalog::LATENCY_JITTER,
            conversion_rate: currency::CONVERSION_RATE,
        }
    }
}

/// Shared, lazily-loaded view of the listing catalog
///
/// The underlying snapshot is read on first use. Concurrent callers
/// share a single load: whichever call initializes the store first does
/// the parsing, and everyone else receives a clone of the same `Arc`.
/// A failed load is not cached, so a later call retries the source.
#[derive(Debug)]
pub struct CatalogStore {
    config: CatalogConfig,
    listings: OnceCell<Arc<Vec<Listing>>>,
}

impl CatalogStore {
    /// Create a store with the given configuration
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            listings: OnceCell::new(),
        }
    }

    /// Create a store over the embedded snapshot with default timing
    pub fn with_defaults() -> Self {
        Self::new(CatalogConfig::default())
    }

    /// Load the full collection, in snapshot order
    ///
    /// Every call simulates source latency, including calls served from
    /// the already-initialized store.
    pub async fn load_all(&self) -> CatalogResult<Arc<Vec<Listing>>> {
        self.simulate_latency(self.config.load_all_delay).await;
        let listings = self.listings().await?;
        debug!("Catalog load returned {} listings", listings.len());
        Ok(listings)
    }

    /// Look up one listing by identifier
    ///
    /// Returns `Ok(None)` when the catalog loads cleanly but contains no
    /// listing with this id. Only a source failure is an error.
    pub async fn load_by_id(&self, id: u32) -> CatalogResult<Option<Listing>> {
        self.simulate_latency(self.config.lookup_delay).await;
        let listings = self.listings().await?;
        let listing = listings.iter().find(|listing| listing.id == id).cloned();
        debug!("Catalog lookup for id {}: found={}", id, listing.is_some());
        Ok(listing)
    }

    /// Initialize the shared snapshot on first use
    async fn listings(&self) -> CatalogResult<Arc<Vec<Listing>>> {
        let listings = self
            .listings
            .get_or_try_init(|| self.init_snapshot())
            .await?;
        Ok(Arc::clone(listings))
    }

    /// Read, parse, and normalize the snapshot behind the shared cell
    async fn init_snapshot(&self) -> CatalogResult<Arc<Vec<Listing>>> {
        let raw = self.read_source().await?;
        let listings = self.parse_catalog(&raw)?;
        info!(
            "Catalog initialized with {} listings (conversion rate {})",
            listings.len(),
            self.config.conversion_rate
        );
        Ok(Arc::new(listings))
    }

    /// Read the raw snapshot text from the configured source
    async fn read_source(&self) -> CatalogResult<String> {
        match &self.config.source {
            None => {
                debug!("Reading embedded catalog snapshot");
                Ok(EMBEDDED_CATALOG.to_string())
            }
            Some(path) => {
                debug!("Reading catalog snapshot from {}", path.display());
                if !path.exists() {
                    return Err(CatalogError::SourceNotFound { path: path.clone() });
                }
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogError::SourceRead {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }

    /// Parse, validate, and currency-normalize a raw snapshot
    fn parse_catalog(&self, raw: &str) -> CatalogResult<Vec<Listing>> {
        let mut listings: Vec<Listing> = serde_json::from_str(raw)?;

        // Listing ids must be unique for lookups to be well-defined
        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.id) {
                return Err(CatalogError::DuplicateId { id: listing.id });
            }
        }

        // Snapshot prices are in the base currency
        for listing in &mut listings {
            listing.price *= self.config.conversion_rate;
        }

        Ok(listings)
    }

    /// Sleep for the base delay plus symmetric random jitter
    async fn simulate_latency(&self, base: Duration) {
        let base_ms = base.as_millis() as u64;
        if base_ms == 0 {
            return;
        }

        let jitter_range = (base_ms as f64 * self.config.latency_jitter) as u64;
        let offset = fastrand::u64(0..=jitter_range.saturating_mul(2));
        let delay_ms = (base_ms + offset).saturating_sub(jitter_range);
        sleep(Duration::from_millis(delay_ms)).await;
    }
}
