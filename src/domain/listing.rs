// src/domain/listing.rs

use super::sqft::normalize_sqft;
use serde::Deserialize;

/// One row of the listings export, before cleaning.
///
/// Numeric columns use `csv::invalid_option` so a stray value only
/// empties that field instead of failing the whole row.
#[derive(Debug, Default, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub location: Option<String>,
    /// e.g. "2 BHK", "4 Bedroom", "1 RK"
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub bhk: Option<u32>,
    #[serde(default)]
    pub total_sqft: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub bath: Option<f64>,
    /// Lakhs
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub price: Option<f64>,
}

/// A cleaned listing: every field present, area in square feet.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub price: f64,
    pub area: f64,
    pub bhk: u32,
    pub bath: f64,
    pub location: String,
}

impl ListingRecord {
    /// Validates and normalizes a raw row. The error names the first
    /// field that made the row unusable.
    pub fn from_raw(raw: &RawListing) -> Result<Self, &'static str> {
        let location = raw
            .location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or("Missing or empty location")?
            .to_string();

        let bhk = raw
            .bhk
            .or_else(|| raw.size.as_deref().and_then(bhk_from_size))
            .filter(|n| *n > 0)
            .ok_or("Missing or unreadable size/bhk")?;

        let area = raw
            .total_sqft
            .as_deref()
            .and_then(|s| normalize_sqft(s))
            .ok_or("Missing or unparseable total_sqft")?;
        if area <= 0.0 {
            return Err("Non-positive total_sqft");
        }

        let bath = raw
            .bath
            .filter(|b| b.is_finite())
            .ok_or("Missing bath")?;

        let price = raw
            .price
            .filter(|p| p.is_finite())
            .ok_or("Missing price")?;

        Ok(ListingRecord {
            price,
            area,
            bhk,
            bath,
            location,
        })
    }
}

/// Leading integer of a size label: "3 BHK" -> 3.
pub fn bhk_from_size(size: &str) -> Option<u32> {
    size.split_whitespace().next()?.parse().ok()
}
