//! # Availability Checker & Slot Finder
//!
//! Pure scheduling computations over collections the caller has already
//! fetched: which groomers are free for a candidate interval, and which start
//! times across a working day still fit a booking of a given length.
//!
//! The availability test for one scheduled groomer:
//!
//! 1. The groomer must be on the active roster; inactive groomers never
//!    surface, even if a stale schedule still lists them.
//! 2. The candidate interval `[start, start + duration)` must sit inside the
//!    groomer's working hours.
//! 3. It must not overlap any non-cancelled booking already assigned to the
//!    groomer on that date. Intervals are half-open, so a booking ending 10:00
//!    and one starting 10:00 coexist. Bookings without an appointment time
//!    cannot conflict and are skipped.
//!
//! Results keep the schedule's shift order; nothing is re-sorted. A date with
//! no schedule document falls back to the whole active roster with no conflict
//! checking — the caller accepts that trade when staff never drew up a plan.

use serde::{Deserialize, Serialize};

use crate::models::groomer::Groomer;
use crate::models::queue::{QueueEntry, QueueStatus};
use crate::models::schedule::{DailySchedule, WorkingHours};
use crate::time::TimeOfDay;

/// Fixed step between candidate start times in the slot scan.
pub const SLOT_STEP_MINUTES: u32 = 30;

/// A bookable start time suggestion for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSuggestion {
    pub time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub available_groomer_count: usize,
}

/// Groomers free for `[start, start + duration)` on the scheduled day.
pub fn available_groomers(
    schedule: Option<&DailySchedule>,
    active_groomers: &[Groomer],
    day_bookings: &[QueueEntry],
    start: TimeOfDay,
    duration_minutes: u32,
) -> Vec<Groomer> {
    let Some(schedule) = schedule else {
        return active_groomers.to_vec();
    };

    let candidate = start.span(duration_minutes);
    let mut free = Vec::new();

    for shift in &schedule.shifts {
        let Some(groomer) = active_groomers.iter().find(|g| g.id == shift.groomer_id) else {
            continue;
        };

        if !shift.hours.range().contains(&candidate) {
            continue;
        }

        let busy = day_bookings.iter().any(|entry| {
            entry.status != QueueStatus::Cancelled
                && entry.assigned_groomer_id == Some(shift.groomer_id)
                && entry
                    .appointment_time
                    .is_some_and(|time| time.span(entry.duration_minutes).overlaps(&candidate))
        });

        if !busy {
            free.push(groomer.clone());
        }
    }

    free
}

/// Greedy scan of the working day in fixed 30-minute steps.
///
/// The window is the first scheduled shift's hours, or the shop default when no
/// schedule exists. A slot is emitted whenever at least one groomer is free and
/// the booking still ends inside the window; the scan stops after `max_slots`
/// suggestions. No ranking, no backtracking.
pub fn find_slots(
    schedule: Option<&DailySchedule>,
    active_groomers: &[Groomer],
    day_bookings: &[QueueEntry],
    duration_minutes: u32,
    default_hours: WorkingHours,
    max_slots: usize,
) -> Vec<SlotSuggestion> {
    let window = schedule
        .and_then(|s| s.shifts.first())
        .map(|shift| shift.hours)
        .unwrap_or(default_hours);

    let mut slots = Vec::new();
    let mut cursor = window.start;

    while cursor.add_minutes(duration_minutes) <= window.end && slots.len() < max_slots {
        let free = available_groomers(
            schedule,
            active_groomers,
            day_bookings,
            cursor,
            duration_minutes,
        );

        if !free.is_empty() {
            slots.push(SlotSuggestion {
                time: cursor,
                end_time: cursor.add_minutes(duration_minutes),
                available_groomer_count: free.len(),
            });
        }

        cursor = cursor.add_minutes(SLOT_STEP_MINUTES);
    }

    slots
}
