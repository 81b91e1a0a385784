//! Catalog data models
//!
//! This module contains the core data types for catalog operations:
//! - `group` - Security group enumeration (SecurityGroup)
//! - `security` - Row and page types (SecurityRow, QueryPage, SuggestionEntry)

mod group;
mod security;

pub use group::SecurityGroup;
pub use security::{QueryPage, SecurityRow, SuggestionEntry};
