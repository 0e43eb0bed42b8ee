//! # Pricing Engine
//!
//! Price totals for a selected service list. Dogs and everything else price
//! straight off the general list; cats get a weight-tiered bathing price plus
//! cat-specific add-on surcharges.
//!
//! Every lookup miss resolves to a documented fallback instead of an error —
//! an unknown service is free, a weight above every bounded tier lands in the
//! catch-all tier — so pricing can never block a completion.

use crate::models::settings::{BATHING_SERVICE, CatPricing, CatWeightTier, PriceTable};

/// Sum of listed prices for the selected services; unknown services count 0.
pub fn compute_price(prices: &PriceTable, services: &[String]) -> i64 {
    services
        .iter()
        .map(|service| prices.get(service).copied().unwrap_or(0))
        .sum()
}

/// Cat total: tiered bathing price by weight and coat, cat add-on surcharges
/// for the rest, general list as the final fallback.
pub fn compute_cat_price(
    cat: &CatPricing,
    prices: &PriceTable,
    services: &[String],
    weight_kg: f64,
    long_hair: bool,
) -> i64 {
    let mut total = 0;

    for service in services {
        if service == BATHING_SERVICE {
            total += match resolve_tier(&cat.bathing_tiers, weight_kg) {
                Some(tier) if long_hair => tier.long_hair_price,
                Some(tier) => tier.short_hair_price,
                // No tier table at all: price bathing like any other service.
                None => prices.get(service).copied().unwrap_or(0),
            };
        } else {
            total += cat
                .addon_prices
                .get(service)
                .or_else(|| prices.get(service))
                .copied()
                .unwrap_or(0);
        }
    }

    total
}

/// First tier whose cap covers the weight; tiers are ascending and the last
/// one (`max_weight: None`) is the open-ended catch-all. A table that forgot
/// its catch-all still resolves: anything above every cap takes the last tier.
fn resolve_tier(tiers: &[CatWeightTier], weight_kg: f64) -> Option<&CatWeightTier> {
    tiers
        .iter()
        .find(|tier| tier.max_weight.is_none_or(|max| weight_kg <= max))
        .or_else(|| tiers.last())
}
