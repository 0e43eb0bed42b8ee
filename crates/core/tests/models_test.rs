use chrono::{Duration, NaiveDate, Utc};
use fake::Fake;
use fake::faker::name::en::Name;
use groomdesk_core::models::customer::Customer;
use groomdesk_core::models::queue::{
    CompletionImage, QueueEntry, QueueEntryPatch, QueueStatus,
};
use groomdesk_core::models::record::{NewServiceRecord, elapsed_minutes};
use groomdesk_core::models::settings::ShopSettings;
use groomdesk_core::time::TimeOfDay;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use serde_test::{Token, assert_tokens};
use uuid::Uuid;

fn t(s: &str) -> TimeOfDay {
    s.parse().expect("valid time of day")
}

fn entry() -> QueueEntry {
    QueueEntry {
        id: Uuid::new_v4(),
        queue_number: 4,
        date: NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date"),
        appointment_time: Some(t("14:00")),
        estimated_end_time: Some(t("15:00")),
        duration_minutes: 60,
        customer_id: Uuid::new_v4(),
        pet_id: Uuid::new_v4(),
        assigned_groomer_id: None,
        services: vec!["bathing".to_string()],
        status: QueueStatus::Booking,
        booking_at: Some(Utc::now()),
        deposit_at: None,
        check_in_at: None,
        completed_at: None,
        deposit_amount: None,
        deposit_method: None,
        check_in_weight: None,
        check_in_notes: None,
        completion_images: Vec::new(),
        priority: false,
        transport_included: false,
        notes: None,
        marketing_source: None,
        booked_by: None,
        created_at: Utc::now(),
    }
}

#[rstest]
#[case(QueueStatus::Booking, "booking")]
#[case(QueueStatus::Deposit, "deposit")]
#[case(QueueStatus::CheckIn, "check-in")]
#[case(QueueStatus::Completed, "completed")]
#[case(QueueStatus::Cancelled, "cancelled")]
fn test_status_wire_format(#[case] status: QueueStatus, #[case] wire: &'static str) {
    assert_tokens(
        &status,
        &[Token::UnitVariant {
            name: "QueueStatus",
            variant: wire,
        }],
    );
    assert_eq!(status.to_string(), wire);
}

#[rstest]
#[case(QueueStatus::Booking, QueueStatus::Deposit, true)]
#[case(QueueStatus::Deposit, QueueStatus::CheckIn, true)]
#[case(QueueStatus::CheckIn, QueueStatus::Completed, true)]
#[case(QueueStatus::Booking, QueueStatus::Cancelled, true)]
#[case(QueueStatus::Deposit, QueueStatus::Cancelled, true)]
#[case(QueueStatus::CheckIn, QueueStatus::Cancelled, true)]
// No skipping ahead
#[case(QueueStatus::Booking, QueueStatus::CheckIn, false)]
#[case(QueueStatus::Booking, QueueStatus::Completed, false)]
#[case(QueueStatus::Deposit, QueueStatus::Completed, false)]
// No moving backwards
#[case(QueueStatus::Deposit, QueueStatus::Booking, false)]
#[case(QueueStatus::CheckIn, QueueStatus::Deposit, false)]
// Terminal states admit nothing
#[case(QueueStatus::Completed, QueueStatus::Cancelled, false)]
#[case(QueueStatus::Cancelled, QueueStatus::Booking, false)]
#[case(QueueStatus::Cancelled, QueueStatus::Cancelled, false)]
fn test_transition_table(
    #[case] from: QueueStatus,
    #[case] to: QueueStatus,
    #[case] allowed: bool,
) {
    assert_eq!(from.can_transition_to(to), allowed);
}

#[test]
fn test_terminal_statuses() {
    assert!(QueueStatus::Completed.is_terminal());
    assert!(QueueStatus::Cancelled.is_terminal());
    assert!(!QueueStatus::Booking.is_terminal());
    assert!(!QueueStatus::Deposit.is_terminal());
    assert!(!QueueStatus::CheckIn.is_terminal());
}

#[test]
fn test_patch_sets_unset_stage_timestamp() {
    let mut entry = entry();
    let now = Utc::now();

    QueueEntryPatch {
        deposit_at: Some(now),
        ..Default::default()
    }
    .apply_to(&mut entry);

    assert_eq!(entry.deposit_at, Some(now));
}

#[test]
fn test_patch_never_overwrites_a_set_stage_timestamp() {
    let mut entry = entry();
    let first = Utc::now();
    let later = first + Duration::minutes(45);
    entry.deposit_at = Some(first);
    let original_booking_at = entry.booking_at;

    QueueEntryPatch {
        booking_at: Some(later),
        deposit_at: Some(later),
        ..Default::default()
    }
    .apply_to(&mut entry);

    assert_eq!(entry.deposit_at, Some(first));
    assert_eq!(entry.booking_at, original_booking_at);
}

#[test]
fn test_patch_appends_completion_images() {
    let mut entry = entry();
    let image = |data: &str| CompletionImage {
        id: Uuid::new_v4(),
        image_data: data.to_string(),
        timestamp: Utc::now(),
    };
    entry.completion_images.push(image("before"));

    QueueEntryPatch {
        completion_images: Some(vec![image("after")]),
        ..Default::default()
    }
    .apply_to(&mut entry);

    assert_eq!(entry.completion_images.len(), 2);
    assert_eq!(entry.completion_images[0].image_data, "before");
    assert_eq!(entry.completion_images[1].image_data, "after");
}

#[test]
fn test_queue_entry_serialization_round_trip() {
    let entry = entry();

    let json = to_string(&entry).expect("Failed to serialize queue entry");
    let deserialized: QueueEntry = from_str(&json).expect("Failed to deserialize queue entry");

    assert_eq!(deserialized.id, entry.id);
    assert_eq!(deserialized.queue_number, entry.queue_number);
    assert_eq!(deserialized.date, entry.date);
    assert_eq!(deserialized.appointment_time, entry.appointment_time);
    assert_eq!(deserialized.estimated_end_time, entry.estimated_end_time);
    assert_eq!(deserialized.services, entry.services);
    assert_eq!(deserialized.status, entry.status);
}

#[test]
fn test_customer_serialization_round_trip() {
    let customer = Customer {
        id: Uuid::new_v4(),
        name: Name().fake(),
        alias: None,
        phone: "089-555-0142".to_string(),
        email: Some("front@groomdesk.example".to_string()),
        address: None,
        created_at: Utc::now(),
        last_visit: None,
    };

    let json = to_string(&customer).expect("Failed to serialize customer");
    let deserialized: Customer = from_str(&json).expect("Failed to deserialize customer");

    assert_eq!(deserialized.id, customer.id);
    assert_eq!(deserialized.name, customer.name);
    assert_eq!(deserialized.phone, customer.phone);
    assert_eq!(deserialized.email, customer.email);
}

#[test]
fn test_record_derivation_copies_the_entry_through() {
    let mut entry = entry();
    let check_in = Utc::now();
    let completed = check_in + Duration::minutes(95);
    entry.status = QueueStatus::Completed;
    entry.check_in_at = Some(check_in);
    entry.completed_at = Some(completed);
    entry.check_in_weight = Some(28.4);
    entry.assigned_groomer_id = Some(Uuid::new_v4());

    let record = NewServiceRecord::from_queue_entry(&entry, 1000, Utc::now());

    assert_eq!(record.queue_id, entry.id);
    assert_eq!(record.customer_id, entry.customer_id);
    assert_eq!(record.pet_id, entry.pet_id);
    assert_eq!(record.groomer_id, entry.assigned_groomer_id);
    assert_eq!(record.services_performed, entry.services);
    assert_eq!(record.check_in_at, entry.check_in_at);
    assert_eq!(record.completed_at, entry.completed_at);
    assert_eq!(record.check_in_weight, Some(28.4));
    assert_eq!(record.duration_minutes, 95);
    assert_eq!(record.price, 1000);
}

#[test]
fn test_record_derivation_substitutes_now_for_missing_timestamps() {
    let mut entry = entry();
    let now = Utc::now();
    entry.check_in_at = None;
    entry.completed_at = Some(now + Duration::minutes(30));

    let record = NewServiceRecord::from_queue_entry(&entry, 0, now);

    // The missing check-in side is taken as "now".
    assert_eq!(record.duration_minutes, 30);
    assert_eq!(record.check_in_at, None);
}

#[rstest]
#[case(0, 0)]
#[case(29, 0)] // rounds down below half a minute
#[case(30, 1)] // half a minute rounds up
#[case(90, 2)]
#[case(3600, 60)]
fn test_elapsed_minutes_rounds_half_up(#[case] seconds: i64, #[case] expected: u32) {
    let start = Utc::now();
    let end = start + Duration::seconds(seconds);
    assert_eq!(elapsed_minutes(start, end), expected);
}

#[test]
fn test_elapsed_minutes_clamps_negative_spans() {
    let start = Utc::now();
    let end = start - Duration::minutes(5);
    assert_eq!(elapsed_minutes(start, end), 0);
}

#[test]
fn test_default_settings_are_usable() {
    let settings = ShopSettings::default();

    assert!(!settings.service_catalog.is_empty());
    assert!(settings.durations.contains_key("bathing"));
    assert!(settings.durations.contains_key("bathing,haircut"));
    assert!(settings.prices.contains_key("haircut"));
    // The tier ladder ends in an open catch-all.
    assert_eq!(
        settings.cat_pricing.bathing_tiers.last().map(|t| t.max_weight),
        Some(None)
    );
    assert!(settings.default_hours.start < settings.default_hours.end);
}
