use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use mockall::automock;
use uuid::Uuid;

use groomdesk_core::models::customer::{Customer, CustomerPatch, NewCustomer};
use groomdesk_core::models::groomer::{Groomer, GroomerPatch, NewGroomer};
use groomdesk_core::models::pet::{NewPet, Pet, PetPatch};
use groomdesk_core::models::queue::{NewQueueEntry, QueueEntry, QueueEntryPatch};
use groomdesk_core::models::record::{NewServiceRecord, ServiceRecord, ServiceRecordPatch};
use groomdesk_core::models::schedule::{DailySchedule, GroomerShift};
use groomdesk_core::models::settings::ShopSettings;

/// Typed CRUD facade over the shop's document collections.
///
/// Every call may fail (the real store is remote); failures are reported, never
/// swallowed, and implementations must leave their in-memory mirror untouched
/// on a failed write. Ids and creation timestamps are minted by the store at
/// create time. `update_*` on an unknown id is an error — callers that need a
/// not-found distinction check with `get_*` first.
#[automock]
#[async_trait]
pub trait ShopStore: Send + Sync {
    // Customers
    async fn create_customer(&self, new: NewCustomer) -> Result<Customer>;
    async fn get_customer(&self, id: Uuid) -> Result<Option<Customer>>;
    async fn update_customer(&self, id: Uuid, patch: CustomerPatch) -> Result<Customer>;
    async fn delete_customer(&self, id: Uuid) -> Result<()>;
    async fn list_customers(&self) -> Result<Vec<Customer>>;

    // Pets
    async fn create_pet(&self, new: NewPet) -> Result<Pet>;
    async fn get_pet(&self, id: Uuid) -> Result<Option<Pet>>;
    async fn update_pet(&self, id: Uuid, patch: PetPatch) -> Result<Pet>;
    async fn delete_pet(&self, id: Uuid) -> Result<()>;
    async fn list_pets_by_owner(&self, customer_id: Uuid) -> Result<Vec<Pet>>;

    // Groomers
    async fn create_groomer(&self, new: NewGroomer) -> Result<Groomer>;
    async fn get_groomer(&self, id: Uuid) -> Result<Option<Groomer>>;
    async fn update_groomer(&self, id: Uuid, patch: GroomerPatch) -> Result<Groomer>;
    async fn list_groomers(&self) -> Result<Vec<Groomer>>;

    // Daily schedules, one document per date
    async fn upsert_daily_schedule(
        &self,
        date: NaiveDate,
        shifts: Vec<GroomerShift>,
    ) -> Result<DailySchedule>;
    async fn get_daily_schedule(&self, date: NaiveDate) -> Result<Option<DailySchedule>>;

    // Booking queue
    async fn create_queue_entry(&self, new: NewQueueEntry) -> Result<QueueEntry>;
    async fn get_queue_entry(&self, id: Uuid) -> Result<Option<QueueEntry>>;
    async fn update_queue_entry(&self, id: Uuid, patch: QueueEntryPatch) -> Result<QueueEntry>;
    async fn delete_queue_entry(&self, id: Uuid) -> Result<()>;
    async fn get_queue_entries_by_date(&self, date: NaiveDate) -> Result<Vec<QueueEntry>>;
    async fn get_queue_entries_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<QueueEntry>>;

    // Service history
    async fn create_service_record(&self, new: NewServiceRecord) -> Result<ServiceRecord>;
    async fn get_service_record(&self, id: Uuid) -> Result<Option<ServiceRecord>>;
    async fn update_service_record(
        &self,
        id: Uuid,
        patch: ServiceRecordPatch,
    ) -> Result<ServiceRecord>;
    async fn get_service_records_by_customer(&self, customer_id: Uuid)
    -> Result<Vec<ServiceRecord>>;
    async fn get_service_records_by_pet(&self, pet_id: Uuid) -> Result<Vec<ServiceRecord>>;

    // Shop settings singleton
    async fn get_settings(&self) -> Result<Option<ShopSettings>>;
    async fn put_settings(&self, settings: ShopSettings) -> Result<ShopSettings>;
}
