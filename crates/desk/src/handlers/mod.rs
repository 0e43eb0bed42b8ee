/// Availability checks and slot suggestions
pub mod availability;
/// Booking creation, edits, and calendar feeds
pub mod booking;
/// Service-history queries and the manual correction path
pub mod records;
/// Customer, pet, and groomer registries
pub mod registry;
/// Daily staff schedules
pub mod schedule;
/// The workflow state machine: status advances and cancellation
pub mod status;
