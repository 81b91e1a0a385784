//! Suggestion sink abstraction.
//!
//! Operations never look up a concrete UI widget themselves; the caller
//! injects an already-resolved sink. The only capability a sink needs is
//! appending one display entry at a time.

use crate::models::SuggestionEntry;

/// Destination for suggestion entries.
///
/// Implemented for `Vec<SuggestionEntry>` out of the box; presentation
/// layers wrap their widget of choice behind this trait.
pub trait SuggestionSink {
    /// Append one entry. Entries arrive in catalog order and are never
    /// deduplicated.
    fn append(&mut self, entry: SuggestionEntry);
}

impl SuggestionSink for Vec<SuggestionEntry> {
    fn append(&mut self, entry: SuggestionEntry) {
        self.push(entry);
    }
}
