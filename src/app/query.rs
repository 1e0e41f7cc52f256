//! Pure query engine over loaded listings
//!
//! Search is a total function from a collection and criteria to the
//! matching subset. It never fails, mutates nothing, and preserves the
//! collection order of the input, so callers can rely on stable results
//! for identical inputs. All predicates must hold for a listing to be
//! kept; an inverted range therefore matches nothing rather than being
//! repaired.

use crate::app::filter::FilterCriteria;
use crate::app::models::Listing;

/// Return the listings matching every criteria field, in collection order
///
/// Prices are compared in the display currency on both sides: the loader
/// normalizes listing prices before they reach this function, and the
/// criteria bounds are seeded from facets over those normalized prices,
/// so no conversion happens here.
pub fn search(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    // Lowercase the term once rather than per listing
    let query = criteria.query.to_lowercase();

    let mut matches = Vec::new();
    for listing in listings {
        // Make filter: exact, case-sensitive
        if let Some(ref make) = criteria.make {
            if &listing.make != make {
                continue;
            }
        }

        // Year range, inclusive at both ends
        if listing.year < criteria.min_year || listing.year > criteria.max_year {
            continue;
        }

        // Price range, inclusive at both ends
        if listing.price < criteria.min_price || listing.price > criteria.max_price {
            continue;
        }

        // Text term, case-insensitive substring over the descriptive fields
        if !query.is_empty() && !matches_query(listing, &query) {
            continue;
        }

        matches.push(listing.clone());
    }

    matches
}

/// Check whether a lowercased term occurs in any searchable field
fn matches_query(listing: &Listing, query: &str) -> bool {
    listing.make.to_lowercase().contains(query)
        || listing.model.to_lowercase().contains(query)
        || listing.description.to_lowercase().contains(query)
        || listing.fuel_type.to_lowercase().contains(query)
        || listing.transmission.to_lowercase().contains(query)
        || listing.color.to_lowercase().contains(query)
        || listing
            .features
            .iter()
            .any(|feature| feature.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::facets::FacetSummary;

    fn listing(id: u32, make: &str, model: &str, year: i32, price: f64) -> Listing {
        Listing {
            id,
            make: make.to_string(),
            model: model.to_string(),
            year,
            price,
            color: "Silver".to_string(),
            mileage: 25_000,
            fuel_type: "gasoline".to_string(),
            transmission: "automatic".to_string(),
            description: format!("Well maintained {make} {model}"),
            features: vec!["Air Conditioning".to_string()],
            image_url: "/images/cars/test.jpg".to_string(),
        }
    }

    fn sample() -> Vec<Listing> {
        let mut corolla = listing(1, "Toyota", "Corolla Altis", 2021, 95_000.0);
        corolla.features.push("Hybrid Engine".to_string());

        let mut civic = listing(2, "Honda", "Civic", 2019, 110_000.0);
        civic.color = "Red".to_string();

        let mut saga = listing(3, "Proton", "Saga", 2016, 32_000.0);
        saga.transmission = "manual".to_string();

        let mut leaf = listing(4, "Nissan", "Leaf", 2022, 140_000.0);
        leaf.fuel_type = "electric".to_string();

        vec![corolla, civic, saga, leaf]
    }

    fn wide_open(listings: &[Listing]) -> FilterCriteria {
        FilterCriteria::seeded(&FacetSummary::from_listings(listings))
    }

    fn ids(listings: &[Listing]) -> Vec<u32> {
        listings.iter().map(|listing| listing.id).collect()
    }

    #[test]
    fn test_seeded_criteria_match_everything() {
        let listings = sample();
        let results = search(&listings, &wide_open(&listings));
        assert_eq!(ids(&results), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_make_filter_is_exact() {
        let listings = sample();
        let mut criteria = wide_open(&listings);
        criteria.make = Some("Honda".to_string());

        assert_eq!(ids(&search(&listings, &criteria)), vec![2]);

        criteria.make = Some("honda".to_string());
        assert!(search(&listings, &criteria).is_empty());
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let listings = sample();
        let mut criteria = wide_open(&listings);
        criteria.min_year = 2019;
        criteria.max_year = 2021;

        assert_eq!(ids(&search(&listings, &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let listings = sample();
        let mut criteria = wide_open(&listings);
        criteria.min_price = 32_000.0;
        criteria.max_price = 110_000.0;

        assert_eq!(ids(&search(&listings, &criteria)), vec![1, 2, 3]);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let listings = sample();
        let mut criteria = wide_open(&listings);
        criteria.min_year = 2022;
        criteria.max_year = 2016;

        assert!(search(&listings, &criteria).is_empty());
    }

    #[test]
    fn test_text_term_is_case_insensitive() {
        let listings = sample();
        let mut criteria = wide_open(&listings);
        criteria.query = "HYBRID".to_string();

        assert_eq!(ids(&search(&listings, &criteria)), vec![1]);
    }

    #[test]
    fn test_text_term_spans_descriptive_fields() {
        let listings = sample();
        let mut criteria = wide_open(&listings);

        criteria.query = "leaf".to_string();
        assert_eq!(ids(&search(&listings, &criteria)), vec![4]);

        criteria.query = "red".to_string();
        assert_eq!(ids(&search(&listings, &criteria)), vec![2]);

        criteria.query = "manual".to_string();
        assert_eq!(ids(&search(&listings, &criteria)), vec![3]);

        criteria.query = "electric".to_string();
        assert_eq!(ids(&search(&listings, &criteria)), vec![4]);

        criteria.query = "maintained".to_string();
        assert_eq!(ids(&search(&listings, &criteria)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_predicates_combine_conjunctively() {
        let listings = sample();
        let mut criteria = wide_open(&listings);
        criteria.make = Some("Toyota".to_string());
        criteria.min_year = 2021;
        criteria.query = "hybrid".to_string();

        assert_eq!(ids(&search(&listings, &criteria)), vec![1]);

        // Same make and term, but the year range excludes the match
        criteria.min_year = 2022;
        assert!(search(&listings, &criteria).is_empty());
    }

    #[test]
    fn test_results_preserve_collection_order() {
        let mut listings = sample();
        listings.reverse();

        let results = search(&listings, &wide_open(&listings));
        assert_eq!(ids(&results), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_search_is_stable_for_identical_inputs() {
        let listings = sample();
        let mut criteria = wide_open(&listings);
        criteria.query = "honda".to_string();

        let first = search(&listings, &criteria);
        let second = search(&listings, &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_collection_yields_empty_results() {
        let listings: Vec<Listing> = Vec::new();
        let criteria = wide_open(&listings);
        assert!(search(&listings, &criteria).is_empty());
    }
}
