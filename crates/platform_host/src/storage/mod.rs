//! Persistence contracts shared by runtime and host adapters.

pub mod record_store;
