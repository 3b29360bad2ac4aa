//! Location normalization
//!
//! Locations are free-text region keys. Absent or blank values are grouped
//! under `"Unknown"` rather than dropped.

pub const UNKNOWN_REGION: &str = "Unknown";

/// Normalize an optional location into a grouping key.
pub fn normalize_region(location: Option<&str>) -> &str {
    match location {
        Some(loc) if !loc.trim().is_empty() => loc,
        _ => UNKNOWN_REGION,
    }
}
