//! Daily staff schedules: one document per date, replaced wholesale on edit.

use chrono::NaiveDate;

use groomdesk_core::errors::{GroomError, GroomResult};
use groomdesk_core::models::schedule::{DailySchedule, GroomerShift};
use groomdesk_store::ShopStore;

use crate::DeskContext;

/// Replaces the staff plan for a date. Every listed groomer must exist and be
/// active; capacity is derived from the shift count.
pub async fn set_daily_schedule(
    ctx: &DeskContext,
    date: NaiveDate,
    shifts: Vec<GroomerShift>,
) -> GroomResult<DailySchedule> {
    for shift in &shifts {
        let groomer = ctx
            .store
            .get_groomer(shift.groomer_id)
            .await
            .map_err(GroomError::Store)?
            .ok_or_else(|| {
                GroomError::NotFound(format!("Groomer with ID {} not found", shift.groomer_id))
            })?;

        if !groomer.is_active {
            return Err(GroomError::Validation(format!(
                "{} is inactive and cannot be scheduled",
                groomer.name
            )));
        }
        if shift.hours.start >= shift.hours.end {
            return Err(GroomError::Validation(format!(
                "Working hours for {} must start before they end",
                groomer.name
            )));
        }
    }

    ctx.store
        .upsert_daily_schedule(date, shifts)
        .await
        .map_err(GroomError::Store)
}

/// The staff plan for a date, if one was drawn up.
pub async fn daily_schedule(
    ctx: &DeskContext,
    date: NaiveDate,
) -> GroomResult<Option<DailySchedule>> {
    ctx.store
        .get_daily_schedule(date)
        .await
        .map_err(GroomError::Store)
}
