//! Backup management for outlay
//!
//! On-demand timestamped copies of the backing file, with listing,
//! restore, and retention pruning.

pub mod manager;

pub use manager::{BackupInfo, BackupManager};
