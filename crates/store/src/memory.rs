//! In-memory reference implementation of the store facade.
//!
//! Collections live in per-collection `RwLock`ed maps, mirroring what the
//! browser session holds after a snapshot fetch from the remote document
//! database. Ids and creation timestamps are minted here, at the create site.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use eyre::{Result, eyre};
use tokio::sync::RwLock;
use uuid::Uuid;

use groomdesk_core::models::customer::{Customer, CustomerPatch, NewCustomer};
use groomdesk_core::models::groomer::{Groomer, GroomerPatch, NewGroomer};
use groomdesk_core::models::pet::{NewPet, Pet, PetPatch};
use groomdesk_core::models::queue::{NewQueueEntry, QueueEntry, QueueEntryPatch};
use groomdesk_core::models::record::{NewServiceRecord, ServiceRecord, ServiceRecordPatch};
use groomdesk_core::models::schedule::{DailySchedule, GroomerShift};
use groomdesk_core::models::settings::ShopSettings;

use crate::store::ShopStore;

#[derive(Default)]
pub struct MemoryStore {
    customers: RwLock<HashMap<Uuid, Customer>>,
    pets: RwLock<HashMap<Uuid, Pet>>,
    groomers: RwLock<HashMap<Uuid, Groomer>>,
    schedules: RwLock<HashMap<NaiveDate, DailySchedule>>,
    queue: RwLock<HashMap<Uuid, QueueEntry>>,
    records: RwLock<HashMap<Uuid, ServiceRecord>>,
    settings: RwLock<Option<ShopSettings>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShopStore for MemoryStore {
    async fn create_customer(&self, new: NewCustomer) -> Result<Customer> {
        let customer = Customer {
            id: Uuid::new_v4(),
            name: new.name,
            alias: new.alias,
            phone: new.phone,
            email: new.email,
            address: new.address,
            created_at: Utc::now(),
            last_visit: None,
        };

        tracing::debug!("Creating customer: id={}, name={}", customer.id, customer.name);
        self.customers
            .write()
            .await
            .insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn get_customer(&self, id: Uuid) -> Result<Option<Customer>> {
        Ok(self.customers.read().await.get(&id).cloned())
    }

    async fn update_customer(&self, id: Uuid, patch: CustomerPatch) -> Result<Customer> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .get_mut(&id)
            .ok_or_else(|| eyre!("Customer {id} not found"))?;

        patch.apply_to(customer);
        tracing::debug!("Updated customer: id={}", id);
        Ok(customer.clone())
    }

    async fn delete_customer(&self, id: Uuid) -> Result<()> {
        self.customers.write().await.remove(&id);
        tracing::debug!("Deleted customer: id={}", id);
        Ok(())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        let mut customers: Vec<Customer> = self.customers.read().await.values().cloned().collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(customers)
    }

    async fn create_pet(&self, new: NewPet) -> Result<Pet> {
        let pet = Pet {
            id: Uuid::new_v4(),
            customer_id: new.customer_id,
            name: new.name,
            species: new.species,
            breed: new.breed,
            weight_kg: new.weight_kg,
            long_hair: new.long_hair,
            color: new.color,
            birth_date: new.birth_date,
            notes: new.notes,
            created_at: Utc::now(),
        };

        tracing::debug!("Creating pet: id={}, name={}", pet.id, pet.name);
        self.pets.write().await.insert(pet.id, pet.clone());
        Ok(pet)
    }

    async fn get_pet(&self, id: Uuid) -> Result<Option<Pet>> {
        Ok(self.pets.read().await.get(&id).cloned())
    }

    async fn update_pet(&self, id: Uuid, patch: PetPatch) -> Result<Pet> {
        let mut pets = self.pets.write().await;
        let pet = pets
            .get_mut(&id)
            .ok_or_else(|| eyre!("Pet {id} not found"))?;

        patch.apply_to(pet);
        tracing::debug!("Updated pet: id={}", id);
        Ok(pet.clone())
    }

    async fn delete_pet(&self, id: Uuid) -> Result<()> {
        self.pets.write().await.remove(&id);
        tracing::debug!("Deleted pet: id={}", id);
        Ok(())
    }

    async fn list_pets_by_owner(&self, customer_id: Uuid) -> Result<Vec<Pet>> {
        let mut pets: Vec<Pet> = self
            .pets
            .read()
            .await
            .values()
            .filter(|pet| pet.customer_id == customer_id)
            .cloned()
            .collect();
        pets.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(pets)
    }

    async fn create_groomer(&self, new: NewGroomer) -> Result<Groomer> {
        let groomer = Groomer {
            id: Uuid::new_v4(),
            name: new.name,
            nickname: new.nickname,
            phone: new.phone,
            specialties: new.specialties,
            experience: new.experience,
            is_active: new.is_active,
            hire_date: new.hire_date,
            notes: new.notes,
            created_at: Utc::now(),
        };

        tracing::debug!("Creating groomer: id={}, name={}", groomer.id, groomer.name);
        self.groomers
            .write()
            .await
            .insert(groomer.id, groomer.clone());
        Ok(groomer)
    }

    async fn get_groomer(&self, id: Uuid) -> Result<Option<Groomer>> {
        Ok(self.groomers.read().await.get(&id).cloned())
    }

    async fn update_groomer(&self, id: Uuid, patch: GroomerPatch) -> Result<Groomer> {
        let mut groomers = self.groomers.write().await;
        let groomer = groomers
            .get_mut(&id)
            .ok_or_else(|| eyre!("Groomer {id} not found"))?;

        patch.apply_to(groomer);
        tracing::debug!("Updated groomer: id={}", id);
        Ok(groomer.clone())
    }

    async fn list_groomers(&self) -> Result<Vec<Groomer>> {
        let mut groomers: Vec<Groomer> = self.groomers.read().await.values().cloned().collect();
        groomers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(groomers)
    }

    async fn upsert_daily_schedule(
        &self,
        date: NaiveDate,
        shifts: Vec<GroomerShift>,
    ) -> Result<DailySchedule> {
        let now = Utc::now();
        let mut schedules = self.schedules.write().await;

        let schedule = match schedules.get_mut(&date) {
            Some(existing) => {
                existing.total_capacity = shifts.len();
                existing.shifts = shifts;
                existing.updated_at = now;
                existing.clone()
            }
            None => {
                let schedule = DailySchedule {
                    id: Uuid::new_v4(),
                    date,
                    total_capacity: shifts.len(),
                    shifts,
                    created_at: now,
                    updated_at: now,
                };
                schedules.insert(date, schedule.clone());
                schedule
            }
        };

        tracing::debug!(
            "Upserted daily schedule: date={}, capacity={}",
            date,
            schedule.total_capacity
        );
        Ok(schedule)
    }

    async fn get_daily_schedule(&self, date: NaiveDate) -> Result<Option<DailySchedule>> {
        Ok(self.schedules.read().await.get(&date).cloned())
    }

    async fn create_queue_entry(&self, new: NewQueueEntry) -> Result<QueueEntry> {
        let entry = QueueEntry {
            id: Uuid::new_v4(),
            queue_number: new.queue_number,
            date: new.date,
            appointment_time: new.appointment_time,
            estimated_end_time: new.estimated_end_time,
            duration_minutes: new.duration_minutes,
            customer_id: new.customer_id,
            pet_id: new.pet_id,
            assigned_groomer_id: new.assigned_groomer_id,
            services: new.services,
            status: new.status,
            booking_at: new.booking_at,
            deposit_at: None,
            check_in_at: None,
            completed_at: None,
            deposit_amount: None,
            deposit_method: None,
            check_in_weight: None,
            check_in_notes: None,
            completion_images: Vec::new(),
            priority: new.priority,
            transport_included: new.transport_included,
            notes: new.notes,
            marketing_source: new.marketing_source,
            booked_by: new.booked_by,
            created_at: Utc::now(),
        };

        tracing::debug!(
            "Creating queue entry: id={}, date={}, number={}",
            entry.id,
            entry.date,
            entry.queue_number
        );
        self.queue.write().await.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn get_queue_entry(&self, id: Uuid) -> Result<Option<QueueEntry>> {
        Ok(self.queue.read().await.get(&id).cloned())
    }

    async fn update_queue_entry(&self, id: Uuid, patch: QueueEntryPatch) -> Result<QueueEntry> {
        let mut queue = self.queue.write().await;
        let entry = queue
            .get_mut(&id)
            .ok_or_else(|| eyre!("Queue entry {id} not found"))?;

        patch.apply_to(entry);
        tracing::debug!("Updated queue entry: id={}, status={}", id, entry.status);
        Ok(entry.clone())
    }

    async fn delete_queue_entry(&self, id: Uuid) -> Result<()> {
        self.queue.write().await.remove(&id);
        tracing::debug!("Deleted queue entry: id={}", id);
        Ok(())
    }

    async fn get_queue_entries_by_date(&self, date: NaiveDate) -> Result<Vec<QueueEntry>> {
        let mut entries: Vec<QueueEntry> = self
            .queue
            .read()
            .await
            .values()
            .filter(|entry| entry.date == date)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| entry.queue_number);
        Ok(entries)
    }

    async fn get_queue_entries_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<QueueEntry>> {
        let mut entries: Vec<QueueEntry> = self
            .queue
            .read()
            .await
            .values()
            .filter(|entry| entry.date >= from && entry.date <= to)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| (entry.date, entry.queue_number));
        Ok(entries)
    }

    async fn create_service_record(&self, new: NewServiceRecord) -> Result<ServiceRecord> {
        let record = ServiceRecord {
            id: Uuid::new_v4(),
            queue_id: new.queue_id,
            customer_id: new.customer_id,
            pet_id: new.pet_id,
            groomer_id: new.groomer_id,
            date: new.date,
            services_performed: new.services_performed,
            booking_at: new.booking_at,
            deposit_at: new.deposit_at,
            check_in_at: new.check_in_at,
            completed_at: new.completed_at,
            duration_minutes: new.duration_minutes,
            check_in_weight: new.check_in_weight,
            check_in_notes: new.check_in_notes,
            completion_images: new.completion_images,
            price: new.price,
            notes: new.notes,
            created_at: Utc::now(),
        };

        tracing::debug!(
            "Creating service record: id={}, queue_id={}",
            record.id,
            record.queue_id
        );
        self.records.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_service_record(&self, id: Uuid) -> Result<Option<ServiceRecord>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn update_service_record(
        &self,
        id: Uuid,
        patch: ServiceRecordPatch,
    ) -> Result<ServiceRecord> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .ok_or_else(|| eyre!("Service record {id} not found"))?;

        patch.apply_to(record);
        tracing::debug!("Updated service record: id={}", id);
        Ok(record.clone())
    }

    async fn get_service_records_by_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<ServiceRecord>> {
        let mut records: Vec<ServiceRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|record| record.customer_id == customer_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| (b.date, b.created_at).cmp(&(a.date, a.created_at)));
        Ok(records)
    }

    async fn get_service_records_by_pet(&self, pet_id: Uuid) -> Result<Vec<ServiceRecord>> {
        let mut records: Vec<ServiceRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|record| record.pet_id == pet_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| (b.date, b.created_at).cmp(&(a.date, a.created_at)));
        Ok(records)
    }

    async fn get_settings(&self) -> Result<Option<ShopSettings>> {
        Ok(self.settings.read().await.clone())
    }

    async fn put_settings(&self, settings: ShopSettings) -> Result<ShopSettings> {
        *self.settings.write().await = Some(settings.clone());
        tracing::debug!("Replaced shop settings document");
        Ok(settings)
    }
}
