//! Runtime configuration for the desk layer.
//!
//! Values come from environment variables with working defaults for every
//! knob, so an unconfigured session behaves like the shop's usual day.
//!
//! - `GROOMDESK_OPEN_TIME`: fallback opening time, "HH:mm" (default "09:00")
//! - `GROOMDESK_CLOSE_TIME`: fallback closing time, "HH:mm" (default "18:00")
//! - `GROOMDESK_MAX_SLOT_SUGGESTIONS`: slot-finder result cap (default 8)
//!
//! The fallback hours only apply when no settings document and no daily
//! schedule supply hours of their own.

use std::env;

use eyre::{Result, WrapErr};

use groomdesk_core::models::schedule::WorkingHours;
use groomdesk_core::time::TimeOfDay;

#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// Working-hours window used when neither settings nor a daily schedule
    /// provide one.
    pub fallback_hours: WorkingHours,

    /// Upper bound on slot suggestions when the caller does not pass one.
    pub max_slot_suggestions: usize,
}

impl Default for DeskConfig {
    fn default() -> Self {
        DeskConfig {
            fallback_hours: WorkingHours {
                start: TimeOfDay::from_minutes(9 * 60),
                end: TimeOfDay::from_minutes(18 * 60),
            },
            max_slot_suggestions: 8,
        }
    }
}

impl DeskConfig {
    pub fn from_env() -> Result<Self> {
        let open: TimeOfDay = env::var("GROOMDESK_OPEN_TIME")
            .unwrap_or_else(|_| "09:00".to_string())
            .parse()
            .wrap_err("Invalid GROOMDESK_OPEN_TIME value")?;

        let close: TimeOfDay = env::var("GROOMDESK_CLOSE_TIME")
            .unwrap_or_else(|_| "18:00".to_string())
            .parse()
            .wrap_err("Invalid GROOMDESK_CLOSE_TIME value")?;

        let max_slot_suggestions = env::var("GROOMDESK_MAX_SLOT_SUGGESTIONS")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .wrap_err("Invalid GROOMDESK_MAX_SLOT_SUGGESTIONS value")?;

        Ok(DeskConfig {
            fallback_hours: WorkingHours {
                start: open,
                end: close,
            },
            max_slot_suggestions,
        })
    }
}
