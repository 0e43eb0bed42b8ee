//! # GroomDesk Desk
//!
//! The front-desk operations layer: the in-process API the UI shell calls into.
//! It owns the booking workflow (create, advance, cancel), availability and
//! slot queries, the staff/customer registries, daily schedules, and the
//! service-history corrections path.
//!
//! ## Architecture
//!
//! - **Context**: a [`DeskContext`] is built once per session and passed into
//!   every handler — the store handle plus runtime configuration. There are no
//!   module-level globals.
//! - **Handlers**: one module per concern under [`handlers`]; each entry point
//!   validates, fetches what it needs from the store, delegates the pure
//!   computation to `groomdesk-core`, and persists the result.
//! - **Errors**: handlers speak `GroomResult`; store failures cross the
//!   boundary as `GroomError::Store` and are surfaced to the user, never
//!   retried silently.

/// Runtime configuration loaded from the environment
pub mod config;
/// Front-desk entry points, grouped by concern
pub mod handlers;

use groomdesk_store::StoreHandle;

use crate::config::DeskConfig;

/// Everything a handler needs, constructed once at session start.
pub struct DeskContext {
    pub store: StoreHandle,
    pub config: DeskConfig,
}

impl DeskContext {
    pub fn new(store: StoreHandle, config: DeskConfig) -> Self {
        DeskContext { store, config }
    }
}
