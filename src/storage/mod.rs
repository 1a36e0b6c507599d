//! Storage layer for outlay
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The expense store is the single owner of the in-memory
//! collection and keeps it synchronized with the backing file after every
//! mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{read_json, write_json_atomic};
