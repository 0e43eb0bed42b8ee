pub mod customer;
pub mod groomer;
pub mod pet;
pub mod queue;
pub mod record;
pub mod schedule;
pub mod settings;
