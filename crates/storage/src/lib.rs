//! Storage abstraction and implementations for Readmark.
//!
//! This crate provides a trait-based storage interface with a JSON-file
//! reference implementation.

#![warn(missing_docs)]

pub mod json_storage;
pub mod trait_;

pub use json_storage::JsonStorage;
pub use trait_::{Result, Storage, StorageError};
