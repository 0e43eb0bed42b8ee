use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::queue::{CompletionImage, QueueEntry};

/// Immutable history entry written when a booking completes. Later corrections
/// go through the manual-edit path, never through re-derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: Uuid,
    /// Back-reference to the originating queue entry, not an ownership link.
    pub queue_id: Uuid,
    pub customer_id: Uuid,
    pub pet_id: Uuid,
    pub groomer_id: Option<Uuid>,
    pub date: NaiveDate,
    pub services_performed: Vec<String>,
    pub booking_at: Option<DateTime<Utc>>,
    pub deposit_at: Option<DateTime<Utc>>,
    pub check_in_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration_minutes: u32,
    pub check_in_weight: Option<f64>,
    pub check_in_notes: Option<String>,
    pub completion_images: Vec<CompletionImage>,
    pub price: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Store-level draft; the store mints the id and creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewServiceRecord {
    pub queue_id: Uuid,
    pub customer_id: Uuid,
    pub pet_id: Uuid,
    pub groomer_id: Option<Uuid>,
    pub date: NaiveDate,
    pub services_performed: Vec<String>,
    pub booking_at: Option<DateTime<Utc>>,
    pub deposit_at: Option<DateTime<Utc>>,
    pub check_in_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration_minutes: u32,
    pub check_in_weight: Option<f64>,
    pub check_in_notes: Option<String>,
    pub completion_images: Vec<CompletionImage>,
    pub price: i64,
    pub notes: Option<String>,
}

impl NewServiceRecord {
    /// Derives the history record from a completed queue entry.
    ///
    /// Serviced duration is the rounded span between check-in and completion.
    /// A missing timestamp on either side is substituted with `now` — a
    /// documented approximation for entries rushed through the workflow, not an
    /// error.
    pub fn from_queue_entry(entry: &QueueEntry, price: i64, now: DateTime<Utc>) -> Self {
        let check_in_at = entry.check_in_at.unwrap_or(now);
        let completed_at = entry.completed_at.unwrap_or(now);

        NewServiceRecord {
            queue_id: entry.id,
            customer_id: entry.customer_id,
            pet_id: entry.pet_id,
            groomer_id: entry.assigned_groomer_id,
            date: entry.date,
            services_performed: entry.services.clone(),
            booking_at: entry.booking_at,
            deposit_at: entry.deposit_at,
            check_in_at: entry.check_in_at,
            completed_at: entry.completed_at,
            duration_minutes: elapsed_minutes(check_in_at, completed_at),
            check_in_weight: entry.check_in_weight,
            check_in_notes: entry.check_in_notes.clone(),
            completion_images: entry.completion_images.clone(),
            price,
            notes: entry.notes.clone(),
        }
    }
}

/// Manual correction path for a persisted record. Editing either workflow
/// timestamp recomputes the serviced duration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceRecordPatch {
    pub date: Option<NaiveDate>,
    pub groomer_id: Option<Uuid>,
    pub services_performed: Option<Vec<String>>,
    pub check_in_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<u32>,
    pub price: Option<i64>,
    pub notes: Option<String>,
}

impl ServiceRecordPatch {
    pub fn apply_to(&self, record: &mut ServiceRecord) {
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(groomer_id) = self.groomer_id {
            record.groomer_id = Some(groomer_id);
        }
        if let Some(services) = &self.services_performed {
            record.services_performed = services.clone();
        }
        if let Some(t) = self.check_in_at {
            record.check_in_at = Some(t);
        }
        if let Some(t) = self.completed_at {
            record.completed_at = Some(t);
        }
        if let Some(duration) = self.duration_minutes {
            record.duration_minutes = duration;
        }
        if let Some(price) = self.price {
            record.price = price;
        }
        if let Some(notes) = &self.notes {
            record.notes = Some(notes.clone());
        }
    }
}

/// Whole minutes between two instants, rounded half-up and clamped at zero.
pub fn elapsed_minutes(from: DateTime<Utc>, to: DateTime<Utc>) -> u32 {
    let seconds = to.signed_duration_since(from).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    ((seconds + 30) / 60) as u32
}
