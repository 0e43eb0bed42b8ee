//! # GroomDesk Store
//!
//! The persistence seam. The shop's real backing store is an external document
//! database reached from the browser session; this crate pins down the contract
//! the rest of the system programs against ([`ShopStore`]) and ships an
//! in-memory reference implementation ([`MemoryStore`]) that doubles as the
//! collection mirror and the test substrate. `MockShopStore` (mockall) covers
//! the failure paths no real store produces on demand.

pub mod memory;
pub mod store;

use std::sync::Arc;

pub use memory::MemoryStore;
pub use store::{MockShopStore, ShopStore};

/// Shared handle to whichever store implementation the session was built with.
pub type StoreHandle = Arc<dyn ShopStore>;
