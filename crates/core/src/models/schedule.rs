use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::{TimeOfDay, TimeRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl WorkingHours {
    pub fn range(&self) -> TimeRange {
        TimeRange {
            start: self.start,
            end: self.end,
        }
    }
}

/// One groomer's shift on a given day. The name is a display snapshot taken when
/// the schedule was drawn up; the id is the authoritative reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroomerShift {
    pub groomer_id: Uuid,
    pub groomer_name: String,
    pub hours: WorkingHours,
}

/// The staff plan for one calendar date, unique per date. When no schedule exists
/// for a date the shop falls back to "all active groomers, default hours".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySchedule {
    pub id: Uuid,
    pub date: NaiveDate,
    pub shifts: Vec<GroomerShift>,
    pub total_capacity: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
