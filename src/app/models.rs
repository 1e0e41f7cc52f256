//! Data models for Showroom
//!
//! This module defines the core data structures used throughout the
//! application, most importantly the vehicle [`Listing`] record sourced
//! from the static catalog.

use serde::{Deserialize, Serialize};

/// One vehicle record in the catalog
///
/// Listings are immutable once loaded: the collection is read-only after
/// the catalog loader has produced it, and every identifier is unique
/// across the collection (enforced at load time).
///
/// The `price` field is stored in the base currency (USD) in the source
/// data and normalized to the display currency (MYR) by the loader. Code
/// downstream of the loader always sees display-currency prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique listing identifier
    pub id: u32,
    /// Manufacturer name (e.g., "Toyota")
    pub make: String,
    /// Model name (e.g., "Corolla Altis")
    pub model: String,
    /// Model year
    pub year: i32,
    /// Asking price (display currency after loading)
    pub price: f64,
    /// Exterior color
    pub color: String,
    /// Odometer reading in miles
    pub mileage: u32,
    /// Fuel type (informally enumerated: gasoline, diesel, electric, hybrid)
    pub fuel_type: String,
    /// Transmission type (e.g., "automatic", "manual")
    pub transmission: String,
    /// Free-text seller description
    pub description: String,
    /// Ordered list of feature strings
    pub features: Vec<String>,
    /// Image reference for the listing
    pub image_url: String,
}

impl Listing {
    /// Get a display-friendly title for this listing
    ///
    /// # Example
    ///
    /// ```
    /// use showroom::app::models::Listing;
    ///
    /// let listing = Listing {
    ///     id: 1,
    ///     make: "Toyota".to_string(),
    ///     model: "Corolla Altis".to_string(),
    ///     year: 2021,
    ///     price: 94_500.0,
    ///     color: "White".to_string(),
    ///     mileage: 32_000,
    ///     fuel_type: "gasoline".to_string(),
    ///     transmission: "automatic".to_string(),
    ///     description: "One owner".to_string(),
    ///     features: vec![],
    ///     image_url: "/images/cars/corolla.jpg".to_string(),
    /// };
    /// assert_eq!(listing.title(), "2021 Toyota Corolla Altis");
    /// ```
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 3,
            "make": "Honda",
            "model": "Civic",
            "year": 2020,
            "price": 21000,
            "color": "Blue",
            "mileage": 45000,
            "fuelType": "gasoline",
            "transmission": "manual",
            "description": "Well maintained, full service history.",
            "features": ["Sunroof", "Reverse Camera"],
            "imageUrl": "/images/cars/civic.jpg"
        }"#
    }

    #[test]
    fn test_listing_deserializes_camel_case_fields() {
        let listing: Listing = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(listing.id, 3);
        assert_eq!(listing.make, "Honda");
        assert_eq!(listing.fuel_type, "gasoline");
        assert_eq!(listing.image_url, "/images/cars/civic.jpg");
        assert_eq!(listing.features.len(), 2);
        assert_eq!(listing.price, 21000.0);
    }

    #[test]
    fn test_listing_round_trips_field_names() {
        let listing: Listing = serde_json::from_str(sample_json()).unwrap();
        let serialized = serde_json::to_string(&listing).unwrap();

        // Wire names stay camelCase so an external catalog file can be
        // produced from a serialized collection.
        assert!(serialized.contains("\"fuelType\""));
        assert!(serialized.contains("\"imageUrl\""));
        assert!(!serialized.contains("\"fuel_type\""));
    }

    #[test]
    fn test_listing_title() {
        let listing: Listing = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(listing.title(), "2020 Honda Civic");
    }

    #[test]
    fn test_listing_rejects_missing_fields() {
        let result = serde_json::from_str::<Listing>(r#"{"id": 1, "make": "Ford"}"#);
        assert!(result.is_err());
    }
}
