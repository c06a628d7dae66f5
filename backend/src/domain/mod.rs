//! # Domain Module
//!
//! Business logic for entries. There is very little of it: creating an
//! entry means giving it an identifier and handing it to storage. Listing
//! goes straight from the IO layer to the repository.

pub mod entry_service;

pub use entry_service::*;
