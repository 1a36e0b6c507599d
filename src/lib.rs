//! outlay - Command-line personal expense tracker
//!
//! This library provides the core functionality for the outlay expense
//! tracker: a durable expense store backed by a single JSON file, and a
//! read-only report engine for summaries and searches over it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, ids)
//! - `storage`: JSON file storage layer (the expense store)
//! - `reports`: Read-only aggregation and search (the report engine)
//! - `display`: Terminal formatting of expenses and reports
//! - `export`: CSV/JSON export of the collection
//! - `backup`: On-demand backups of the backing file
//! - `cli`: clap subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use outlay::config::{paths::OutlayPaths, settings::Settings};
//! use outlay::storage::ExpenseStore;
//!
//! let paths = OutlayPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = ExpenseStore::new(paths.expenses_file());
//! store.load()?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{OutlayError, OutlayResult};
