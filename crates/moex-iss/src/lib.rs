//! MOEX ISS Securities Suggestion Crate
//!
//! This crate searches the Moscow Exchange ISS catalog for tradable
//! securities and feeds matching entries into a caller-supplied
//! suggestion sink.
//!
//! # Overview
//!
//! Two operations are exposed:
//!
//! - [`run_search`] - one free-text lookup by name fragment
//! - [`run_bulk_load`] - walk every known security group page by page and
//!   load everything
//!
//! Each matching security becomes one `"<name> (<isin>)"` entry. Rows
//! missing either field are dropped; nothing is deduplicated. Failed
//! fetches look like empty results to the caller - the sink simply gains
//! no entries for them.
//!
//! # Architecture
//!
//! ```text
//! +----------------+     +----------------+
//! |   run_search   |     |  run_bulk_load |
//! +----------------+     +----------------+
//!         |                       |
//!         v                       v
//! +------------------------------------+
//! |           CatalogClient            |  (trait seam)
//! +------------------------------------+
//!                   |
//!                   v
//! +------------------------------------+
//! |           MoexIssClient            |  (reqwest, iss.moex.com)
//! +------------------------------------+
//!
//! entries flow into:
//! +------------------------------------+
//! |           SuggestionSink           |  (caller-supplied)
//! +------------------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`SecurityRow`] - one decoded catalog row (optional name and isin)
//! - [`SecurityGroup`] - the seven catalog partitions a bulk load walks
//! - [`SuggestionEntry`] - display string appended to a sink
//! - [`CatalogError`] - transport, status, and decode failures

pub mod client;
pub mod errors;
pub mod models;
pub mod sink;
pub mod suggest;

// Re-export all public types from models
pub use models::{QueryPage, SecurityGroup, SecurityRow, SuggestionEntry};

// Re-export client types
pub use client::{CatalogClient, MoexIssClient};

// Re-export errors
pub use errors::CatalogError;

// Re-export sink trait
pub use sink::SuggestionSink;

// Re-export operations
pub use suggest::{run_bulk_load, run_search, GROUP_OFFSET_LIMIT, PAGE_SIZE};
