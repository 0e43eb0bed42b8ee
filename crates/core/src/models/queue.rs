use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::TimeOfDay;

/// Lifecycle stage of a booking.
///
/// The workflow only ever moves forward: booking -> deposit -> check-in ->
/// completed, with cancellation reachable from any non-terminal stage. There is
/// no transition back to an earlier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueueStatus {
    Booking,
    Deposit,
    CheckIn,
    Completed,
    Cancelled,
}

impl QueueStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, QueueStatus::Completed | QueueStatus::Cancelled)
    }

    /// Exhaustive transition table for the booking workflow.
    pub fn can_transition_to(self, target: QueueStatus) -> bool {
        use QueueStatus::*;

        match (self, target) {
            (Booking, Deposit) | (Deposit, CheckIn) | (CheckIn, Completed) => true,
            (from, Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueueStatus::Booking => "booking",
            QueueStatus::Deposit => "deposit",
            QueueStatus::CheckIn => "check-in",
            QueueStatus::Completed => "completed",
            QueueStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionImage {
    pub id: Uuid,
    /// Encoded image payload as handed over by the UI layer; opaque to the core.
    pub image_data: String,
    pub timestamp: DateTime<Utc>,
}

/// One booking in the daily queue, from first contact through completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: Uuid,
    /// Per-date running number, 1-based. Assigned by counting the date's existing
    /// entries at creation; not globally unique and never reused after deletes.
    pub queue_number: u32,
    pub date: NaiveDate,
    pub appointment_time: Option<TimeOfDay>,
    pub estimated_end_time: Option<TimeOfDay>,
    pub duration_minutes: u32,
    pub customer_id: Uuid,
    pub pet_id: Uuid,
    pub assigned_groomer_id: Option<Uuid>,
    /// Selected services in the order the staff picked them; duration and price
    /// lookups sort a copy, display keeps this order.
    pub services: Vec<String>,
    pub status: QueueStatus,
    pub booking_at: Option<DateTime<Utc>>,
    pub deposit_at: Option<DateTime<Utc>>,
    pub check_in_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub deposit_amount: Option<i64>,
    pub deposit_method: Option<String>,
    pub check_in_weight: Option<f64>,
    pub check_in_notes: Option<String>,
    pub completion_images: Vec<CompletionImage>,
    pub priority: bool,
    pub transport_included: bool,
    pub notes: Option<String>,
    pub marketing_source: Option<String>,
    pub booked_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Store-level draft; the store mints the id and creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQueueEntry {
    pub queue_number: u32,
    pub date: NaiveDate,
    pub appointment_time: Option<TimeOfDay>,
    pub estimated_end_time: Option<TimeOfDay>,
    pub duration_minutes: u32,
    pub customer_id: Uuid,
    pub pet_id: Uuid,
    pub assigned_groomer_id: Option<Uuid>,
    pub services: Vec<String>,
    pub status: QueueStatus,
    pub booking_at: Option<DateTime<Utc>>,
    pub priority: bool,
    pub transport_included: bool,
    pub notes: Option<String>,
    pub marketing_source: Option<String>,
    pub booked_by: Option<String>,
}

/// Raw booking form input. Required fields arrive as options so that each one
/// missing can be reported with its own message instead of a deserialization
/// failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateBookingRequest {
    pub customer_id: Option<Uuid>,
    pub pet_id: Option<Uuid>,
    pub services: Vec<String>,
    pub date: Option<NaiveDate>,
    pub appointment_time: Option<TimeOfDay>,
    pub groomer_id: Option<Uuid>,
    pub priority: bool,
    pub transport_included: bool,
    pub notes: Option<String>,
    pub marketing_source: Option<String>,
    pub booked_by: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateBookingRequest {
    pub services: Option<Vec<String>>,
    pub date: Option<NaiveDate>,
    pub appointment_time: Option<TimeOfDay>,
    pub groomer_id: Option<Uuid>,
    pub priority: Option<bool>,
    pub transport_included: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositPayload {
    /// Amount actually collected. Zero is a valid value and means the entry
    /// reached the deposit stage with nothing collected.
    pub amount: i64,
    pub method: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckInPayload {
    pub weight_kg: Option<f64>,
    pub notes: Option<String>,
    /// Staff may adjust the service list at the counter; duration and estimated
    /// end time are recomputed when they do.
    pub services: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionPayload {
    pub groomer_id: Option<Uuid>,
    pub images: Vec<CompletionImage>,
    pub notes: Option<String>,
}

/// Stage-specific data accompanying a status advance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AdvancePayload {
    None,
    Deposit(DepositPayload),
    CheckIn(CheckInPayload),
    Completion(CompletionPayload),
}

/// Typed partial update for a queue entry.
///
/// Stage timestamps are idempotent: applying a patch never overwrites one that
/// is already set, so re-running a transition cannot rewrite history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueEntryPatch {
    pub date: Option<NaiveDate>,
    pub appointment_time: Option<TimeOfDay>,
    pub estimated_end_time: Option<TimeOfDay>,
    pub duration_minutes: Option<u32>,
    pub assigned_groomer_id: Option<Uuid>,
    pub services: Option<Vec<String>>,
    pub status: Option<QueueStatus>,
    pub booking_at: Option<DateTime<Utc>>,
    pub deposit_at: Option<DateTime<Utc>>,
    pub check_in_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub deposit_amount: Option<i64>,
    pub deposit_method: Option<String>,
    pub check_in_weight: Option<f64>,
    pub check_in_notes: Option<String>,
    /// Appended to the entry's existing images, never replacing them.
    pub completion_images: Option<Vec<CompletionImage>>,
    pub priority: Option<bool>,
    pub transport_included: Option<bool>,
    pub notes: Option<String>,
    pub marketing_source: Option<String>,
    pub booked_by: Option<String>,
}

impl QueueEntryPatch {
    pub fn apply_to(&self, entry: &mut QueueEntry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(time) = self.appointment_time {
            entry.appointment_time = Some(time);
        }
        if let Some(end) = self.estimated_end_time {
            entry.estimated_end_time = Some(end);
        }
        if let Some(duration) = self.duration_minutes {
            entry.duration_minutes = duration;
        }
        if let Some(groomer_id) = self.assigned_groomer_id {
            entry.assigned_groomer_id = Some(groomer_id);
        }
        if let Some(services) = &self.services {
            entry.services = services.clone();
        }
        if let Some(status) = self.status {
            entry.status = status;
        }

        // Stage timestamps only ever move from unset to set.
        if let Some(t) = self.booking_at {
            entry.booking_at.get_or_insert(t);
        }
        if let Some(t) = self.deposit_at {
            entry.deposit_at.get_or_insert(t);
        }
        if let Some(t) = self.check_in_at {
            entry.check_in_at.get_or_insert(t);
        }
        if let Some(t) = self.completed_at {
            entry.completed_at.get_or_insert(t);
        }

        if let Some(amount) = self.deposit_amount {
            entry.deposit_amount = Some(amount);
        }
        if let Some(method) = &self.deposit_method {
            entry.deposit_method = Some(method.clone());
        }
        if let Some(weight) = self.check_in_weight {
            entry.check_in_weight = Some(weight);
        }
        if let Some(notes) = &self.check_in_notes {
            entry.check_in_notes = Some(notes.clone());
        }
        if let Some(images) = &self.completion_images {
            entry.completion_images.extend(images.iter().cloned());
        }
        if let Some(priority) = self.priority {
            entry.priority = priority;
        }
        if let Some(transport) = self.transport_included {
            entry.transport_included = transport;
        }
        if let Some(notes) = &self.notes {
            entry.notes = Some(notes.clone());
        }
        if let Some(source) = &self.marketing_source {
            entry.marketing_source = Some(source.clone());
        }
        if let Some(booked_by) = &self.booked_by {
            entry.booked_by = Some(booked_by.clone());
        }
    }
}
