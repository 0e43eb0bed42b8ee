//! The booking workflow state machine.
//!
//! One entry point, [`advance_status`], moves a queue entry through
//! booking -> deposit -> check-in -> completed, with cancellation reachable
//! from any non-terminal stage. Every move is checked against the transition
//! table before anything is written; a terminal entry rejects all further
//! moves.
//!
//! Stage side effects:
//!
//! - **deposit**: the collected amount and method are recorded (zero is a
//!   valid amount — the stage was reached, nothing was collected).
//! - **check-in**: the pet's weight record is refreshed from the scale, and a
//!   service-list adjustment at the counter recomputes duration and estimated
//!   end time.
//! - **completed**: requires a servicing groomer; derives and persists the
//!   service record exactly once, attaches completion images, and refreshes
//!   the owner's last-visit marker.
//! - **cancelled**: records nothing beyond the status itself.
//!
//! Stage timestamps are written through the patch layer, which keeps them
//! idempotent: a timestamp that is already set survives any later transition.

use chrono::Utc;
use uuid::Uuid;

use groomdesk_core::duration::compute_duration;
use groomdesk_core::errors::{GroomError, GroomResult};
use groomdesk_core::models::customer::CustomerPatch;
use groomdesk_core::models::pet::{Pet, PetPatch, Species};
use groomdesk_core::models::queue::{
    AdvancePayload, CheckInPayload, CompletionPayload, DepositPayload, QueueEntry,
    QueueEntryPatch, QueueStatus,
};
use groomdesk_core::models::record::NewServiceRecord;
use groomdesk_core::models::settings::ShopSettings;
use groomdesk_core::pricing::{compute_cat_price, compute_price};
use groomdesk_store::ShopStore;

use crate::DeskContext;

/// Moves a queue entry to `target`, applying the stage's side effects.
pub async fn advance_status(
    ctx: &DeskContext,
    id: Uuid,
    target: QueueStatus,
    payload: AdvancePayload,
) -> GroomResult<QueueEntry> {
    let entry = ctx
        .store
        .get_queue_entry(id)
        .await
        .map_err(GroomError::Store)?
        .ok_or_else(|| GroomError::NotFound(format!("Queue entry with ID {id} not found")))?;

    if !entry.status.can_transition_to(target) {
        return Err(GroomError::InvalidTransition {
            from: entry.status,
            to: target,
        });
    }

    let updated = match target {
        QueueStatus::Deposit => {
            let AdvancePayload::Deposit(deposit) = payload else {
                return Err(GroomError::Validation(
                    "Deposit details are required to reach the deposit stage".to_string(),
                ));
            };
            record_deposit(ctx, &entry, deposit).await?
        }
        QueueStatus::CheckIn => {
            let details = match payload {
                AdvancePayload::CheckIn(details) => details,
                AdvancePayload::None => CheckInPayload::default(),
                _ => {
                    return Err(GroomError::Validation(
                        "Check-in details do not match the target status".to_string(),
                    ));
                }
            };
            check_in(ctx, &entry, details).await?
        }
        QueueStatus::Completed => {
            let completion = match payload {
                AdvancePayload::Completion(completion) => completion,
                AdvancePayload::None => CompletionPayload::default(),
                _ => {
                    return Err(GroomError::Validation(
                        "Completion details do not match the target status".to_string(),
                    ));
                }
            };
            complete(ctx, &entry, completion).await?
        }
        QueueStatus::Cancelled => cancel(ctx, &entry).await?,
        // The transition table never admits a move back to booking.
        QueueStatus::Booking => unreachable!("no transition leads back to booking"),
    };

    tracing::info!(
        "Queue entry {} advanced: {} -> {}",
        id,
        entry.status,
        updated.status
    );
    Ok(updated)
}

/// Cancels a non-terminal booking. Never creates a service record.
pub async fn cancel_booking(ctx: &DeskContext, id: Uuid) -> GroomResult<QueueEntry> {
    advance_status(ctx, id, QueueStatus::Cancelled, AdvancePayload::None).await
}

async fn record_deposit(
    ctx: &DeskContext,
    entry: &QueueEntry,
    deposit: DepositPayload,
) -> GroomResult<QueueEntry> {
    if deposit.amount < 0 {
        return Err(GroomError::Validation(
            "Deposit amount must not be negative".to_string(),
        ));
    }

    ctx.store
        .update_queue_entry(
            entry.id,
            QueueEntryPatch {
                status: Some(QueueStatus::Deposit),
                deposit_at: Some(Utc::now()),
                deposit_amount: Some(deposit.amount),
                deposit_method: deposit.method,
                ..Default::default()
            },
        )
        .await
        .map_err(GroomError::Store)
}

async fn check_in(
    ctx: &DeskContext,
    entry: &QueueEntry,
    details: CheckInPayload,
) -> GroomResult<QueueEntry> {
    // The scale reading becomes the pet's new weight of record.
    if let Some(weight_kg) = details.weight_kg {
        ctx.store
            .update_pet(
                entry.pet_id,
                PetPatch {
                    weight_kg: Some(weight_kg),
                    ..Default::default()
                },
            )
            .await
            .map_err(GroomError::Store)?;
    }

    // A service adjustment at the counter re-derives duration and end time.
    let (services, duration_minutes, estimated_end_time) = match details.services {
        Some(services) => {
            if services.is_empty() {
                return Err(GroomError::Validation(
                    "At least one service must be selected".to_string(),
                ));
            }
            let settings = ctx.store.get_settings().await.map_err(GroomError::Store)?;
            let duration = compute_duration(settings.as_ref().map(|s| &s.durations), &services);
            let end = entry
                .appointment_time
                .map(|time| time.add_minutes(duration));
            (Some(services), Some(duration), end)
        }
        None => (None, None, None),
    };

    ctx.store
        .update_queue_entry(
            entry.id,
            QueueEntryPatch {
                status: Some(QueueStatus::CheckIn),
                check_in_at: Some(Utc::now()),
                check_in_weight: details.weight_kg,
                check_in_notes: details.notes,
                services,
                duration_minutes,
                estimated_end_time,
                ..Default::default()
            },
        )
        .await
        .map_err(GroomError::Store)
}

async fn complete(
    ctx: &DeskContext,
    entry: &QueueEntry,
    completion: CompletionPayload,
) -> GroomResult<QueueEntry> {
    let groomer_id = completion
        .groomer_id
        .or(entry.assigned_groomer_id)
        .ok_or_else(|| {
            GroomError::Validation(
                "A servicing groomer must be chosen before completion".to_string(),
            )
        })?;

    ctx.store
        .get_groomer(groomer_id)
        .await
        .map_err(GroomError::Store)?
        .ok_or_else(|| GroomError::NotFound(format!("Groomer with ID {groomer_id} not found")))?;

    let now = Utc::now();
    let updated = ctx
        .store
        .update_queue_entry(
            entry.id,
            QueueEntryPatch {
                status: Some(QueueStatus::Completed),
                completed_at: Some(now),
                assigned_groomer_id: Some(groomer_id),
                completion_images: Some(completion.images),
                notes: completion.notes,
                ..Default::default()
            },
        )
        .await
        .map_err(GroomError::Store)?;

    // Derive the history record from the merged entry, exactly once.
    let pet = ctx
        .store
        .get_pet(updated.pet_id)
        .await
        .map_err(GroomError::Store)?
        .ok_or_else(|| {
            GroomError::NotFound(format!("Pet with ID {} not found", updated.pet_id))
        })?;
    let settings = ctx
        .store
        .get_settings()
        .await
        .map_err(GroomError::Store)?
        .unwrap_or_default();
    let price = price_for(&settings, &pet, &updated);

    let record = ctx
        .store
        .create_service_record(NewServiceRecord::from_queue_entry(&updated, price, now))
        .await
        .map_err(GroomError::Store)?;
    tracing::info!(
        "Service record {} created for queue entry {}",
        record.id,
        updated.id
    );

    ctx.store
        .update_customer(
            updated.customer_id,
            CustomerPatch {
                last_visit: Some(now),
                ..Default::default()
            },
        )
        .await
        .map_err(GroomError::Store)?;

    Ok(updated)
}

async fn cancel(ctx: &DeskContext, entry: &QueueEntry) -> GroomResult<QueueEntry> {
    ctx.store
        .update_queue_entry(
            entry.id,
            QueueEntryPatch {
                status: Some(QueueStatus::Cancelled),
                ..Default::default()
            },
        )
        .await
        .map_err(GroomError::Store)
}

/// Final price for the performed services: cats go through the weight-tiered
/// engine with the check-in weight (fresher than the stored one) when present.
fn price_for(settings: &ShopSettings, pet: &Pet, entry: &QueueEntry) -> i64 {
    if pet.species == Species::Cat {
        let weight_kg = entry.check_in_weight.or(pet.weight_kg).unwrap_or(0.0);
        compute_cat_price(
            &settings.cat_pricing,
            &settings.prices,
            &entry.services,
            weight_kg,
            pet.long_hair,
        )
    } else {
        compute_price(&settings.prices, &entry.services)
    }
}
