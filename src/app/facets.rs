//! Facet derivation for the listing catalog
//!
//! This module computes the summary facets used to seed and bound the
//! filter controls: the distinct manufacturer list and the year and price
//! ranges of the loaded collection. Facets are derived once per catalog
//! load and are immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::app::models::Listing;

/// Inclusive minimum/maximum pair for a range facet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    /// Smallest value observed in the collection
    pub min: T,
    /// Largest value observed in the collection
    pub max: T,
}

/// Derived bounds and options used to seed and bound filter controls
///
/// Prices are in the display currency: the loader normalizes them before
/// any facet is computed, so these bounds share a unit with the criteria
/// bounds and the query engine's comparisons.
///
/// On an empty collection both ranges fall back to `{min: 0, max: 0}`
/// rather than propagating non-finite values, since downstream range
/// controls require finite bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetSummary {
    /// Distinct manufacturer names in first-seen order
    pub makes: Vec<String>,
    /// Model year range across the collection
    pub years: Bounds<i32>,
    /// Price range across the collection (display currency)
    pub prices: Bounds<f64>,
}

impl FacetSummary {
    /// Derive the full facet summary from a loaded collection
    pub fn from_listings(listings: &[Listing]) -> Self {
        Self {
            makes: distinct_makes(listings),
            years: year_bounds(listings),
            prices: price_bounds(listings),
        }
    }
}

/// Collect distinct manufacturer names, preserving first-seen order
///
/// Deduplication is by exact string equality, case-sensitive: "BMW" and
/// "bmw" are distinct makes.
pub fn distinct_makes(listings: &[Listing]) -> Vec<String> {
    let mut makes: Vec<String> = Vec::new();
    for listing in listings {
        if !makes.contains(&listing.make) {
            makes.push(listing.make.clone());
        }
    }
    makes
}

/// Compute the inclusive model year range of the collection
///
/// Returns `{min: 0, max: 0}` for an empty collection.
pub fn year_bounds(listings: &[Listing]) -> Bounds<i32> {
    let mut years = listings.iter().map(|listing| listing.year);
    let first = match years.next() {
        Some(year) => year,
        None => return Bounds { min: 0, max: 0 },
    };

    let (min, max) = years.fold((first, first), |(min, max), year| {
        (min.min(year), max.max(year))
    });
    Bounds { min, max }
}

/// Compute the inclusive price range of the collection (display currency)
///
/// Returns `{min: 0.0, max: 0.0}` for an empty collection.
pub fn price_bounds(listings: &[Listing]) -> Bounds<f64> {
    let mut prices = listings.iter().map(|listing| listing.price);
    let first = match prices.next() {
        Some(price) => price,
        None => return Bounds { min: 0.0, max: 0.0 },
    };

    let (min, max) = prices.fold((first, first), |(min, max), price| {
        (min.min(price), max.max(price))
    });
    Bounds { min, max }
}
