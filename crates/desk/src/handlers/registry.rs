//! Customer, pet, and groomer registries for the front desk.

use uuid::Uuid;

use groomdesk_core::errors::{GroomError, GroomResult};
use groomdesk_core::models::customer::{
    CreateCustomerRequest, Customer, CustomerPatch, NewCustomer,
};
use groomdesk_core::models::groomer::{CreateGroomerRequest, Groomer, GroomerPatch, NewGroomer};
use groomdesk_core::models::pet::{CreatePetRequest, NewPet, Pet, PetPatch};
use groomdesk_store::ShopStore;

use crate::DeskContext;

pub async fn create_customer(
    ctx: &DeskContext,
    request: CreateCustomerRequest,
) -> GroomResult<Customer> {
    if request.name.trim().is_empty() {
        return Err(GroomError::Validation(
            "Customer name is required".to_string(),
        ));
    }
    if request.phone.trim().is_empty() {
        return Err(GroomError::Validation(
            "Customer phone number is required".to_string(),
        ));
    }

    ctx.store
        .create_customer(NewCustomer {
            name: request.name,
            alias: request.alias,
            phone: request.phone,
            email: request.email,
            address: request.address,
        })
        .await
        .map_err(GroomError::Store)
}

pub async fn get_customer(ctx: &DeskContext, id: Uuid) -> GroomResult<Customer> {
    ctx.store
        .get_customer(id)
        .await
        .map_err(GroomError::Store)?
        .ok_or_else(|| GroomError::NotFound(format!("Customer with ID {id} not found")))
}

pub async fn update_customer(
    ctx: &DeskContext,
    id: Uuid,
    patch: CustomerPatch,
) -> GroomResult<Customer> {
    get_customer(ctx, id).await?;
    ctx.store
        .update_customer(id, patch)
        .await
        .map_err(GroomError::Store)
}

pub async fn list_customers(ctx: &DeskContext) -> GroomResult<Vec<Customer>> {
    ctx.store.list_customers().await.map_err(GroomError::Store)
}

pub async fn create_pet(ctx: &DeskContext, request: CreatePetRequest) -> GroomResult<Pet> {
    let customer_id = request
        .customer_id
        .ok_or_else(|| GroomError::Validation("An owner must be selected".to_string()))?;
    if request.name.trim().is_empty() {
        return Err(GroomError::Validation("Pet name is required".to_string()));
    }

    ctx.store
        .get_customer(customer_id)
        .await
        .map_err(GroomError::Store)?
        .ok_or_else(|| GroomError::NotFound(format!("Customer with ID {customer_id} not found")))?;

    ctx.store
        .create_pet(NewPet {
            customer_id,
            name: request.name,
            species: request.species,
            breed: request.breed,
            weight_kg: request.weight_kg,
            long_hair: request.long_hair,
            color: request.color,
            birth_date: request.birth_date,
            notes: request.notes,
        })
        .await
        .map_err(GroomError::Store)
}

pub async fn get_pet(ctx: &DeskContext, id: Uuid) -> GroomResult<Pet> {
    ctx.store
        .get_pet(id)
        .await
        .map_err(GroomError::Store)?
        .ok_or_else(|| GroomError::NotFound(format!("Pet with ID {id} not found")))
}

pub async fn update_pet(ctx: &DeskContext, id: Uuid, patch: PetPatch) -> GroomResult<Pet> {
    get_pet(ctx, id).await?;
    ctx.store.update_pet(id, patch).await.map_err(GroomError::Store)
}

pub async fn pets_for_customer(ctx: &DeskContext, customer_id: Uuid) -> GroomResult<Vec<Pet>> {
    ctx.store
        .list_pets_by_owner(customer_id)
        .await
        .map_err(GroomError::Store)
}

/// New groomers join the roster active.
pub async fn create_groomer(
    ctx: &DeskContext,
    request: CreateGroomerRequest,
) -> GroomResult<Groomer> {
    if request.name.trim().is_empty() {
        return Err(GroomError::Validation(
            "Groomer name is required".to_string(),
        ));
    }

    ctx.store
        .create_groomer(NewGroomer {
            name: request.name,
            nickname: request.nickname,
            phone: request.phone,
            specialties: request.specialties,
            experience: request.experience,
            is_active: true,
            hire_date: request.hire_date,
            notes: request.notes,
        })
        .await
        .map_err(GroomError::Store)
}

pub async fn get_groomer(ctx: &DeskContext, id: Uuid) -> GroomResult<Groomer> {
    ctx.store
        .get_groomer(id)
        .await
        .map_err(GroomError::Store)?
        .ok_or_else(|| GroomError::NotFound(format!("Groomer with ID {id} not found")))
}

pub async fn update_groomer(
    ctx: &DeskContext,
    id: Uuid,
    patch: GroomerPatch,
) -> GroomResult<Groomer> {
    get_groomer(ctx, id).await?;
    ctx.store
        .update_groomer(id, patch)
        .await
        .map_err(GroomError::Store)
}

/// Deactivated groomers disappear from every availability computation but keep
/// their history.
pub async fn set_groomer_active(ctx: &DeskContext, id: Uuid, active: bool) -> GroomResult<Groomer> {
    update_groomer(
        ctx,
        id,
        GroomerPatch {
            is_active: Some(active),
            ..Default::default()
        },
    )
    .await
}

/// The active roster, the candidate pool for assignment.
pub async fn active_roster(ctx: &DeskContext) -> GroomResult<Vec<Groomer>> {
    Ok(ctx
        .store
        .list_groomers()
        .await
        .map_err(GroomError::Store)?
        .into_iter()
        .filter(|groomer| groomer.is_active)
        .collect())
}
