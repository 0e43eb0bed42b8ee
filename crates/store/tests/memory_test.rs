use chrono::NaiveDate;
use fake::Fake;
use fake::faker::name::en::Name;
use groomdesk_core::models::customer::{CustomerPatch, NewCustomer};
use groomdesk_core::models::groomer::{ExperienceTier, GroomerSpecialty, NewGroomer};
use groomdesk_core::models::pet::{NewPet, PetPatch, Species};
use groomdesk_core::models::queue::{NewQueueEntry, QueueEntryPatch, QueueStatus};
use groomdesk_core::models::schedule::{GroomerShift, WorkingHours};
use groomdesk_core::models::settings::ShopSettings;
use groomdesk_core::time::TimeOfDay;
use groomdesk_store::{MemoryStore, ShopStore};
use pretty_assertions::assert_eq;
use tokio_test::assert_ok;
use uuid::Uuid;

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid date")
}

fn new_customer(name: &str) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        alias: None,
        phone: "089-555-0100".to_string(),
        email: None,
        address: None,
    }
}

fn new_entry(date_str: &str, queue_number: u32) -> NewQueueEntry {
    NewQueueEntry {
        queue_number,
        date: date(date_str),
        appointment_time: None,
        estimated_end_time: None,
        duration_minutes: 60,
        customer_id: Uuid::new_v4(),
        pet_id: Uuid::new_v4(),
        assigned_groomer_id: None,
        services: vec!["bathing".to_string()],
        status: QueueStatus::Booking,
        booking_at: None,
        priority: false,
        transport_included: false,
        notes: None,
        marketing_source: None,
        booked_by: None,
    }
}

#[tokio::test]
async fn test_customer_crud_cycle() {
    let store = MemoryStore::new();

    let created = store
        .create_customer(new_customer(&Name().fake::<String>()))
        .await
        .expect("create customer");
    assert!(created.last_visit.is_none());

    let fetched = store
        .get_customer(created.id)
        .await
        .expect("get customer")
        .expect("customer exists");
    assert_eq!(fetched.name, created.name);

    let updated = store
        .update_customer(
            created.id,
            CustomerPatch {
                phone: Some("02-555-0199".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update customer");
    assert_eq!(updated.phone, "02-555-0199");

    store.delete_customer(created.id).await.expect("delete customer");
    assert!(
        store
            .get_customer(created.id)
            .await
            .expect("get customer")
            .is_none()
    );
}

#[tokio::test]
async fn test_update_unknown_id_is_an_error() {
    let store = MemoryStore::new();

    let result = store
        .update_customer(Uuid::new_v4(), CustomerPatch::default())
        .await;
    assert!(result.is_err());

    let result = store
        .update_queue_entry(Uuid::new_v4(), QueueEntryPatch::default())
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_customers_list_sorted_by_name() {
    let store = MemoryStore::new();
    store.create_customer(new_customer("Nok")).await.expect("create");
    store.create_customer(new_customer("Anong")).await.expect("create");

    let names: Vec<String> = store
        .list_customers()
        .await
        .expect("list customers")
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Anong", "Nok"]);
}

#[tokio::test]
async fn test_pets_filter_by_owner() {
    let store = MemoryStore::new();
    let owner = store
        .create_customer(new_customer("Anong"))
        .await
        .expect("create customer");

    let pet = store
        .create_pet(NewPet {
            customer_id: owner.id,
            name: "Mochi".to_string(),
            species: Species::Cat,
            breed: None,
            weight_kg: Some(3.2),
            long_hair: true,
            color: Some("cream".to_string()),
            birth_date: None,
            notes: None,
        })
        .await
        .expect("create pet");

    let pets = store.list_pets_by_owner(owner.id).await.expect("list pets");
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].id, pet.id);

    let none = store
        .list_pets_by_owner(Uuid::new_v4())
        .await
        .expect("list pets");
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_pet_weight_update() {
    let store = MemoryStore::new();
    let owner = store
        .create_customer(new_customer("Anong"))
        .await
        .expect("create customer");
    let pet = store
        .create_pet(NewPet {
            customer_id: owner.id,
            name: "Taro".to_string(),
            species: Species::Dog,
            breed: Some("Shiba Inu".to_string()),
            weight_kg: Some(9.0),
            long_hair: false,
            color: None,
            birth_date: None,
            notes: None,
        })
        .await
        .expect("create pet");

    let updated = store
        .update_pet(
            pet.id,
            PetPatch {
                weight_kg: Some(9.6),
                ..Default::default()
            },
        )
        .await
        .expect("update pet");
    assert_eq!(updated.weight_kg, Some(9.6));
}

#[tokio::test]
async fn test_queue_entries_by_date_are_numbered_in_order() {
    let store = MemoryStore::new();
    // Insert out of order; the read comes back by queue number.
    store.create_queue_entry(new_entry("2026-03-14", 2)).await.expect("create");
    store.create_queue_entry(new_entry("2026-03-14", 1)).await.expect("create");
    store.create_queue_entry(new_entry("2026-03-15", 1)).await.expect("create");

    let entries = store
        .get_queue_entries_by_date(date("2026-03-14"))
        .await
        .expect("query by date");
    let numbers: Vec<u32> = entries.iter().map(|e| e.queue_number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[tokio::test]
async fn test_queue_range_query_is_inclusive_and_ordered() {
    let store = MemoryStore::new();
    store.create_queue_entry(new_entry("2026-03-13", 1)).await.expect("create");
    store.create_queue_entry(new_entry("2026-03-14", 1)).await.expect("create");
    store.create_queue_entry(new_entry("2026-03-15", 1)).await.expect("create");
    store.create_queue_entry(new_entry("2026-03-16", 1)).await.expect("create");

    let entries = store
        .get_queue_entries_in_range(date("2026-03-14"), date("2026-03-15"))
        .await
        .expect("range query");
    let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date("2026-03-14"), date("2026-03-15")]);
}

#[tokio::test]
async fn test_schedule_upsert_replaces_the_same_date() {
    let store = MemoryStore::new();
    let groomer = store
        .create_groomer(NewGroomer {
            name: "Mali".to_string(),
            nickname: None,
            phone: "089-555-0101".to_string(),
            specialties: vec![GroomerSpecialty::Dog],
            experience: ExperienceTier::Senior,
            is_active: true,
            hire_date: None,
            notes: None,
        })
        .await
        .expect("create groomer");

    let shift = |start: &str, end: &str| GroomerShift {
        groomer_id: groomer.id,
        groomer_name: groomer.name.clone(),
        hours: WorkingHours {
            start: start.parse::<TimeOfDay>().expect("valid time"),
            end: end.parse::<TimeOfDay>().expect("valid time"),
        },
    };

    let first = store
        .upsert_daily_schedule(date("2026-03-14"), vec![shift("09:00", "18:00")])
        .await
        .expect("upsert schedule");
    assert_eq!(first.total_capacity, 1);

    let second = store
        .upsert_daily_schedule(
            date("2026-03-14"),
            vec![shift("09:00", "13:00"), shift("13:00", "18:00")],
        )
        .await
        .expect("upsert schedule");

    // Same document, replaced contents.
    assert_eq!(second.id, first.id);
    assert_eq!(second.total_capacity, 2);

    let fetched = store
        .get_daily_schedule(date("2026-03-14"))
        .await
        .expect("get schedule")
        .expect("schedule exists");
    assert_eq!(fetched.shifts.len(), 2);
}

#[tokio::test]
async fn test_settings_singleton_round_trip() {
    let store = MemoryStore::new();
    assert!(store.get_settings().await.expect("get settings").is_none());

    let stored = assert_ok!(store.put_settings(ShopSettings::default()).await);
    let fetched = store
        .get_settings()
        .await
        .expect("get settings")
        .expect("settings exist");
    assert_eq!(fetched, stored);
}

#[tokio::test]
async fn test_stage_timestamps_survive_repeated_patches() {
    let store = MemoryStore::new();
    let entry = store
        .create_queue_entry(new_entry("2026-03-14", 1))
        .await
        .expect("create entry");

    let first = chrono::Utc::now();
    let updated = store
        .update_queue_entry(
            entry.id,
            QueueEntryPatch {
                status: Some(QueueStatus::Deposit),
                deposit_at: Some(first),
                ..Default::default()
            },
        )
        .await
        .expect("first update");
    assert_eq!(updated.deposit_at, Some(first));

    let later = first + chrono::Duration::minutes(10);
    let updated = store
        .update_queue_entry(
            entry.id,
            QueueEntryPatch {
                deposit_at: Some(later),
                ..Default::default()
            },
        )
        .await
        .expect("second update");
    assert_eq!(updated.deposit_at, Some(first));
}
