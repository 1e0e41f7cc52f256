//! Terminal rendering for catalog listings and facets
//!
//! Formatting helpers shared by the command handlers: price and mileage
//! formatting, the listing results table, the single-listing detail
//! block, and the facet summary. Prices arrive already normalized to
//! the display currency and are shown without fraction digits.

use crate::app::chat::Role;
use crate::app::facets::{Bounds, FacetSummary};
use crate::app::filter::FilterCriteria;
use crate::app::models::Listing;
use crate::constants::currency::DISPLAY_PREFIX;

/// Format a price as a whole display-currency amount, e.g. "RM 104,850"
pub fn format_price(price: f64) -> String {
    let rounded = price.round().max(0.0) as u64;
    format!("{} {}", DISPLAY_PREFIX, group_thousands(rounded))
}

/// Format a mileage reading, e.g. "25,000 mi"
pub fn format_mileage(mileage: u32) -> String {
    format!("{} mi", group_thousands(u64::from(mileage)))
}

/// Render a year range facet, e.g. "2015-2023", collapsing equal bounds
pub fn format_year_range(bounds: &Bounds<i32>) -> String {
    if bounds.min == bounds.max {
        bounds.min.to_string()
    } else {
        format!("{}-{}", bounds.min, bounds.max)
    }
}

/// Render a price range facet, e.g. "RM 30,000 - RM 250,000"
pub fn format_price_range(bounds: &Bounds<f64>) -> String {
    if bounds.min == bounds.max {
        format_price(bounds.min)
    } else {
        format!("{} - {}", format_price(bounds.min), format_price(bounds.max))
    }
}

/// Notice line for results hidden by a display limit
pub fn format_overflow_notice(hidden: usize) -> String {
    format!("... and {} more (raise --limit to see them)", hidden)
}

/// Terminal label for a chat transcript role
pub fn chat_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::System => "Support",
    }
}

/// Insert thousands separators into a non-negative integer
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Display search results as a clean table
pub fn display_listing_table(listings: &[Listing]) {
    if listings.is_empty() {
        println!("No listings to display.");
        return;
    }

    // Calculate column widths
    let vehicle_width = listings
        .iter()
        .map(|listing| listing.title().len())
        .max()
        .unwrap_or(7)
        .max(7); // Minimum width for "Vehicle"

    let price_width = listings
        .iter()
        .map(|listing| format_price(listing.price).len())
        .max()
        .unwrap_or(5)
        .max(5); // Minimum width for "Price"

    let mileage_width = listings
        .iter()
        .map(|listing| format_mileage(listing.mileage).len())
        .max()
        .unwrap_or(7)
        .max(7); // Minimum width for "Mileage"

    let id_width = 4; // Width for "ID"

    // Print header
    println!(
        "{:>id_width$} {:<vehicle_width$} {:>price_width$} {:>mileage_width$} {:<8}",
        "ID",
        "Vehicle",
        "Price",
        "Mileage",
        "Fuel",
        id_width = id_width,
        vehicle_width = vehicle_width,
        price_width = price_width,
        mileage_width = mileage_width
    );

    // Print separator line
    println!(
        "{}",
        "─".repeat(id_width + vehicle_width + price_width + mileage_width + 12)
    );

    // Print data rows in collection order
    for listing in listings {
        println!(
            "{:>id_width$} {:<vehicle_width$} {:>price_width$} {:>mileage_width$} {:<8}",
            listing.id,
            listing.title(),
            format_price(listing.price),
            format_mileage(listing.mileage),
            listing.fuel_type,
            id_width = id_width,
            vehicle_width = vehicle_width,
            price_width = price_width,
            mileage_width = mileage_width
        );
    }
}

/// Display the full detail block for one listing
pub fn display_listing_detail(listing: &Listing) {
    println!("🚗 {}", listing.title());
    println!("   {:<13} {}", "Price:", format_price(listing.price));
    println!("   {:<13} {}", "Mileage:", format_mileage(listing.mileage));
    println!("   {:<13} {}", "Color:", listing.color);
    println!("   {:<13} {}", "Fuel type:", listing.fuel_type);
    println!("   {:<13} {}", "Transmission:", listing.transmission);

    if !listing.features.is_empty() {
        println!("   {:<13} {}", "Features:", listing.features.join(", "));
    }

    println!("   {:<13} {}", "Image:", listing.image_url);
    println!();
    println!("   {}", listing.description);
}

/// Display the criteria a search ran with, one line per active field
pub fn display_active_criteria(criteria: &FilterCriteria) {
    if let Some(ref make) = criteria.make {
        println!("   {:<7} {}", "Make:", make);
    }
    println!(
        "   {:<7} {}",
        "Years:",
        format_year_range(&Bounds {
            min: criteria.min_year,
            max: criteria.max_year,
        })
    );
    println!(
        "   {:<7} {}",
        "Prices:",
        format_price_range(&Bounds {
            min: criteria.min_price,
            max: criteria.max_price,
        })
    );
    if !criteria.query.is_empty() {
        println!("   {:<7} \"{}\"", "Term:", criteria.query);
    }
}

/// Display the derived facet summary
pub fn display_facet_summary(facets: &FacetSummary) {
    println!(
        "Makes:  {} ({})",
        facets.makes.join(", "),
        facets.makes.len()
    );
    println!("Years:  {}", format_year_range(&facets.years));
    println!("Prices: {}", format_price_range(&facets.prices));
}
