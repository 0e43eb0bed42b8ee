use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::schedule::WorkingHours;
use crate::time::TimeOfDay;

/// Minutes assumed for a booking when no duration can be looked up at all.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// The one service whose cat price is resolved through the weight tiers.
pub const BATHING_SERVICE: &str = "bathing";

/// Service name (or sorted combo key) to minutes.
pub type DurationTable = HashMap<String, u32>;

/// Service name to listed price.
pub type PriceTable = HashMap<String, i64>;

/// One step of the cat bathing price ladder. Tiers are ordered ascending by
/// `max_weight`; `None` marks the open-ended catch-all at the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatWeightTier {
    pub max_weight: Option<f64>,
    pub short_hair_price: i64,
    pub long_hair_price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatPricing {
    pub bathing_tiers: Vec<CatWeightTier>,
    /// Cat-specific surcharges for non-bathing services; anything absent here
    /// falls back to the general price list.
    pub addon_prices: PriceTable,
}

/// Shop-wide configuration document, read-mostly, singleton in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSettings {
    pub service_catalog: Vec<String>,
    /// Individual services plus combo overrides keyed by the sorted,
    /// comma-joined service names.
    pub durations: DurationTable,
    pub prices: PriceTable,
    pub default_hours: WorkingHours,
    pub cat_pricing: CatPricing,
}

impl Default for ShopSettings {
    fn default() -> Self {
        let service_catalog: Vec<String> = [
            "bathing",
            "haircut",
            "nail trim",
            "ear cleaning",
            "teeth brushing",
            "de-shedding",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let durations = DurationTable::from_iter([
            ("bathing".to_string(), 60),
            ("haircut".to_string(), 90),
            ("nail trim".to_string(), 15),
            ("ear cleaning".to_string(), 15),
            ("teeth brushing".to_string(), 15),
            ("de-shedding".to_string(), 45),
            // Bath-and-cut combo runs shorter than the plain sum.
            ("bathing,haircut".to_string(), 120),
        ]);

        let prices = PriceTable::from_iter([
            ("bathing".to_string(), 400),
            ("haircut".to_string(), 600),
            ("nail trim".to_string(), 100),
            ("ear cleaning".to_string(), 100),
            ("teeth brushing".to_string(), 100),
            ("de-shedding".to_string(), 300),
        ]);

        let cat_pricing = CatPricing {
            bathing_tiers: vec![
                CatWeightTier {
                    max_weight: Some(3.5),
                    short_hair_price: 350,
                    long_hair_price: 450,
                },
                CatWeightTier {
                    max_weight: Some(5.0),
                    short_hair_price: 400,
                    long_hair_price: 500,
                },
                CatWeightTier {
                    max_weight: Some(8.0),
                    short_hair_price: 450,
                    long_hair_price: 550,
                },
                CatWeightTier {
                    max_weight: None,
                    short_hair_price: 500,
                    long_hair_price: 600,
                },
            ],
            addon_prices: PriceTable::from_iter([
                ("haircut".to_string(), 800),
                ("nail trim".to_string(), 150),
            ]),
        };

        ShopSettings {
            service_catalog,
            durations,
            prices,
            default_hours: WorkingHours {
                start: TimeOfDay::from_minutes(9 * 60),
                end: TimeOfDay::from_minutes(18 * 60),
            },
            cat_pricing,
        }
    }
}
