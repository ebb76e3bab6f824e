//! Storage layer for identifier records

pub mod record;
pub mod store;

pub use record::{Record, SEPARATOR};
pub use store::{Store, StoreError};
