//! Service-history queries and the manual correction path.
//!
//! Records are derived exactly once when a booking completes; everything here
//! only reads them back or applies staff corrections after the fact.

use uuid::Uuid;

use groomdesk_core::errors::{GroomError, GroomResult};
use groomdesk_core::models::record::{ServiceRecord, ServiceRecordPatch, elapsed_minutes};
use groomdesk_store::ShopStore;

use crate::DeskContext;

pub async fn get_service_record(ctx: &DeskContext, id: Uuid) -> GroomResult<ServiceRecord> {
    ctx.store
        .get_service_record(id)
        .await
        .map_err(GroomError::Store)?
        .ok_or_else(|| GroomError::NotFound(format!("Service record with ID {id} not found")))
}

/// Staff correction of a persisted record. When either workflow timestamp is
/// edited the serviced duration is recomputed from the merged pair; an explicit
/// duration in the patch wins over the recomputation.
pub async fn edit_service_record(
    ctx: &DeskContext,
    id: Uuid,
    mut patch: ServiceRecordPatch,
) -> GroomResult<ServiceRecord> {
    let record = get_service_record(ctx, id).await?;

    if let Some(services) = &patch.services_performed {
        if services.is_empty() {
            return Err(GroomError::Validation(
                "A record must keep at least one performed service".to_string(),
            ));
        }
    }

    if patch.duration_minutes.is_none()
        && (patch.check_in_at.is_some() || patch.completed_at.is_some())
    {
        let check_in_at = patch.check_in_at.or(record.check_in_at);
        let completed_at = patch.completed_at.or(record.completed_at);
        if let (Some(check_in_at), Some(completed_at)) = (check_in_at, completed_at) {
            patch.duration_minutes = Some(elapsed_minutes(check_in_at, completed_at));
        }
    }

    let updated = ctx
        .store
        .update_service_record(id, patch)
        .await
        .map_err(GroomError::Store)?;

    tracing::info!("Service record {} corrected", id);
    Ok(updated)
}

/// A customer's grooming history, newest first.
pub async fn history_for_customer(
    ctx: &DeskContext,
    customer_id: Uuid,
) -> GroomResult<Vec<ServiceRecord>> {
    ctx.store
        .get_service_records_by_customer(customer_id)
        .await
        .map_err(GroomError::Store)
}

/// A pet's grooming history, newest first.
pub async fn history_for_pet(ctx: &DeskContext, pet_id: Uuid) -> GroomResult<Vec<ServiceRecord>> {
    ctx.store
        .get_service_records_by_pet(pet_id)
        .await
        .map_err(GroomError::Store)
}
