//! Filter criteria state for catalog searches
//!
//! Criteria are seeded from a [`FacetSummary`] so that a freshly seeded
//! filter matches the whole collection, then mutated one field at a time
//! as the user narrows the view. Updates are taken at face value: no
//! cross-field validation happens here, so an inverted range is kept
//! as-is and simply matches nothing when searched.

use serde::{Deserialize, Serialize};

use crate::app::facets::FacetSummary;

/// The active search criteria applied to the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact manufacturer to match, `None` for all makes
    pub make: Option<String>,
    /// Inclusive lower model year bound
    pub min_year: i32,
    /// Inclusive upper model year bound
    pub max_year: i32,
    /// Inclusive lower price bound (display currency)
    pub min_price: f64,
    /// Inclusive upper price bound (display currency)
    pub max_price: f64,
    /// Free-text term, empty for no text filtering
    pub query: String,
}

/// A single-field change to the active criteria
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaUpdate {
    Make(Option<String>),
    MinYear(i32),
    MaxYear(i32),
    MinPrice(f64),
    MaxPrice(f64),
    Query(String),
}

impl FilterCriteria {
    /// Build the widest criteria for a collection
    ///
    /// Seeded criteria span the facet bounds exactly, select all makes,
    /// and carry no text term, so searching with them returns every
    /// listing in the collection.
    pub fn seeded(facets: &FacetSummary) -> Self {
        Self {
            make: None,
            min_year: facets.years.min,
            max_year: facets.years.max,
            min_price: facets.prices.min,
            max_price: facets.prices.max,
            query: String::new(),
        }
    }

    /// Replace one field, leaving every other field untouched
    pub fn apply(&mut self, update: CriteriaUpdate) {
        match update {
            CriteriaUpdate::Make(make) => self.make = make,
            CriteriaUpdate::MinYear(year) => self.min_year = year,
            CriteriaUpdate::MaxYear(year) => self.max_year = year,
            CriteriaUpdate::MinPrice(price) => self.min_price = price,
            CriteriaUpdate::MaxPrice(price) => self.max_price = price,
            CriteriaUpdate::Query(query) => self.query = query,
        }
    }

    /// Restore the seeded state for the given facets
    pub fn reset(&mut self, facets: &FacetSummary) {
        *self = Self::seeded(facets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::facets::Bounds;

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

    #[test]
    fn test_seeded_spans_facet_bounds() {
        let criteria = FilterCriteria::seeded(&facets());

        assert_eq!(criteria.make, None);
        assert_eq!(criteria.min_year, 2015);
        assert_eq!(criteria.max_year, 2023);
        assert_eq!(criteria.min_price, 30_000.0);
        assert_eq!(criteria.max_price, 250_000.0);
        assert!(criteria.query.is_empty());
    }

    #[test]
    fn test_apply_touches_only_one_field() {
        let facets = facets();
        let mut criteria = FilterCriteria::seeded(&facets);

        criteria.apply(CriteriaUpdate::Make(Some("Honda".to_string())));

        let seeded = FilterCriteria::seeded(&facets);
        assert_eq!(criteria.make, Some("Honda".to_string()));
        assert_eq!(criteria.min_year, seeded.min_year);
        assert_eq!(criteria.max_year, seeded.max_year);
        assert_eq!(criteria.min_price, seeded.min_price);
        assert_eq!(criteria.max_price, seeded.max_price);
        assert_eq!(criteria.query, seeded.query);
    }

    #[test]
    fn test_apply_preserves_inverted_range() {
        let mut criteria = FilterCriteria::seeded(&facets());

        criteria.apply(CriteriaUpdate::MinYear(2022));
        criteria.apply(CriteriaUpdate::MaxYear(2018));

        assert_eq!(criteria.min_year, 2022);
        assert_eq!(criteria.max_year, 2018);
    }

    #[test]
    fn test_clearing_make_selects_all() {
        let mut criteria = FilterCriteria::seeded(&facets());

        criteria.apply(CriteriaUpdate::Make(Some("Toyota".to_string())));
        criteria.apply(CriteriaUpdate::Make(None));

        assert_eq!(criteria.make, None);
    }

    #[test]
    fn test_reset_restores_seeded_state() {
        let facets = facets();
        let mut criteria = FilterCriteria::seeded(&facets);

        criteria.apply(CriteriaUpdate::Make(Some("Honda".to_string())));
        criteria.apply(CriteriaUpdate::MinPrice(90_000.0));
        criteria.apply(CriteriaUpdate::Query("hybrid".to_string()));
        criteria.reset(&facets);

        assert_eq!(criteria, FilterCriteria::seeded(&facets));
    }
}
