use serde::Deserialize;

/// Display entry appended to a suggestion sink, always `"<name> (<isin>)"`.
pub type SuggestionEntry = String;

/// One page of catalog results, in the order returned by ISS.
pub type QueryPage = Vec<SecurityRow>;

/// One security decoded from an ISS `securities.data` row.
///
/// ISS returns each row as a 2-element array `[name, isin]`; either
/// position may be null.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "(Option<String>, Option<String>)")]
pub struct SecurityRow {
    /// Security name (e.g., "Газпром")
    pub name: Option<String>,

    /// ISIN-like identifier (e.g., "RU0007661625")
    pub isin: Option<String>,
}

impl SecurityRow {
    /// Create a row with both fields present.
    pub fn new(name: impl Into<String>, isin: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            isin: Some(isin.into()),
        }
    }

    /// Format the row as a suggestion entry.
    ///
    /// Returns `None` when either field is missing; such rows are never
    /// forwarded to a sink.
    pub fn suggestion(&self) -> Option<SuggestionEntry> {
        match (&self.name, &self.isin) {
            (Some(name), Some(isin)) => Some(format!("{} ({})", name, isin)),
            _ => None,
        }
    }
}

impl From<(Option<String>, Option<String>)> for SecurityRow {
    fn from((name, isin): (Option<String>, Option<String>)) -> Self {
        Self { name, isin }
    }
}
