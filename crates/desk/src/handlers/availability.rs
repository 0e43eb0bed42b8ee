//! Availability and slot queries: fetch the day's collections, delegate to the
//! pure checkers in `groomdesk-core`.

use chrono::NaiveDate;

use groomdesk_core::availability::{self, SlotSuggestion};
use groomdesk_core::duration::compute_duration;
use groomdesk_core::errors::{GroomError, GroomResult};
use groomdesk_core::models::groomer::Groomer;
use groomdesk_core::time::TimeOfDay;
use groomdesk_store::ShopStore;

use crate::DeskContext;

/// Groomers free for `[start, start + duration)` on the given date.
pub async fn available_groomers(
    ctx: &DeskContext,
    date: NaiveDate,
    start: TimeOfDay,
    duration_minutes: u32,
) -> GroomResult<Vec<Groomer>> {
    let schedule = ctx
        .store
        .get_daily_schedule(date)
        .await
        .map_err(GroomError::Store)?;
    let active: Vec<Groomer> = ctx
        .store
        .list_groomers()
        .await
        .map_err(GroomError::Store)?
        .into_iter()
        .filter(|groomer| groomer.is_active)
        .collect();
    let day_bookings = ctx
        .store
        .get_queue_entries_by_date(date)
        .await
        .map_err(GroomError::Store)?;

    Ok(availability::available_groomers(
        schedule.as_ref(),
        &active,
        &day_bookings,
        start,
        duration_minutes,
    ))
}

/// Bookable start times for the selected services on the given date.
///
/// `max_slots` falls back to the configured suggestion cap. The working window
/// comes from the day's schedule, then the settings document, then the
/// configured fallback hours.
pub async fn find_slots(
    ctx: &DeskContext,
    date: NaiveDate,
    services: &[String],
    max_slots: Option<usize>,
) -> GroomResult<Vec<SlotSuggestion>> {
    let settings = ctx.store.get_settings().await.map_err(GroomError::Store)?;
    let duration_minutes = compute_duration(settings.as_ref().map(|s| &s.durations), services);
    let default_hours = settings
        .as_ref()
        .map(|s| s.default_hours)
        .unwrap_or(ctx.config.fallback_hours);

    let schedule = ctx
        .store
        .get_daily_schedule(date)
        .await
        .map_err(GroomError::Store)?;
    let active: Vec<Groomer> = ctx
        .store
        .list_groomers()
        .await
        .map_err(GroomError::Store)?
        .into_iter()
        .filter(|groomer| groomer.is_active)
        .collect();
    let day_bookings = ctx
        .store
        .get_queue_entries_by_date(date)
        .await
        .map_err(GroomError::Store)?;

    Ok(availability::find_slots(
        schedule.as_ref(),
        &active,
        &day_bookings,
        duration_minutes,
        default_hours,
        max_slots.unwrap_or(ctx.config.max_slot_suggestions),
    ))
}
