//! File-backed storage for the records document.

pub mod connection;
pub mod record_store;
