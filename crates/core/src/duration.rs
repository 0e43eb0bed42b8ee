//! # Duration Engine
//!
//! Maps a set of selected services to a total appointment length in minutes.
//! Used twice with identical results: for live feedback while the booking form
//! is being filled in, and to fix the persisted duration at booking time.
//!
//! Lookup order:
//!
//! 1. No services selected — the shop default of 60 minutes.
//! 2. The sorted, comma-joined combo key exists in the table — that value wins
//!    outright; a combo override is a replacement, never a sum.
//! 3. Otherwise the individual durations are summed, with an unknown service
//!    contributing nothing.
//!
//! A missing duration table (absent or corrupt settings document) falls back to
//! the 60-minute default rather than failing: the front desk must keep taking
//! bookings even when configuration is broken.

use crate::models::settings::{DEFAULT_DURATION_MINUTES, DurationTable};

/// Canonical lookup key for a service combination: names sorted, comma-joined.
/// Sorting makes the key independent of the order the staff clicked things in.
pub fn combo_key(services: &[String]) -> String {
    let mut sorted: Vec<&str> = services.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(",")
}

/// Total duration in minutes for the selected services.
pub fn compute_duration(table: Option<&DurationTable>, services: &[String]) -> u32 {
    if services.is_empty() {
        return DEFAULT_DURATION_MINUTES;
    }

    let Some(table) = table else {
        return DEFAULT_DURATION_MINUTES;
    };

    if let Some(&combo) = table.get(&combo_key(services)) {
        return combo;
    }

    services
        .iter()
        .map(|service| table.get(service).copied().unwrap_or(0))
        .sum()
}
