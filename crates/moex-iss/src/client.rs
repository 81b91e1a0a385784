//! MOEX ISS catalog client.
//!
//! This module talks to the Moscow Exchange ISS REST API.
//!
//! # API Endpoints
//!
//! - Text search: `{base}/securities.json?iss.meta=off&securities.columns=name,isin&q={fragment}`
//! - Group page: `{base}/securities.json?iss.meta=off&securities.columns=name,isin&group_by=group&group_by_filter={group}&start={offset}`
//! - Secid lookup: `{base}/securities.json?iss.meta=off&securities.columns=secid,shortname,isin&start=0&limit=10&q={query}`
//!
//! # Response Format
//!
//! ISS returns a `securities` table whose `data` field is an ordered list
//! of arrays, one array per row, columns in the requested order. Any cell
//! may be null.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use urlencoding::encode;

use crate::errors::CatalogError;
use crate::models::{QueryPage, SecurityGroup, SecurityRow};

const BASE_URL: &str = "https://iss.moex.com/iss";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Columns requested for suggestion queries.
const SUGGEST_COLUMNS: &str = "name,isin";

/// Columns requested for secid lookup.
const SECID_COLUMNS: &str = "secid,shortname,isin";

/// Response from `securities.json` with `name,isin` columns.
#[derive(Debug, Deserialize)]
struct SuggestResponse {
    securities: SuggestTable,
}

#[derive(Debug, Deserialize)]
struct SuggestTable {
    #[serde(default)]
    data: Vec<SecurityRow>,
}

/// Response from `securities.json` with `secid,shortname,isin` columns.
#[derive(Debug, Deserialize)]
struct SecIdResponse {
    securities: SecIdTable,
}

#[derive(Debug, Deserialize)]
struct SecIdTable {
    #[serde(default)]
    data: Vec<SecIdRow>,
}

#[derive(Debug, Deserialize)]
#[serde(from = "(Option<String>, Option<String>, Option<String>)")]
struct SecIdRow {
    secid: Option<String>,
    shortname: Option<String>,
    isin: Option<String>,
}

impl From<(Option<String>, Option<String>, Option<String>)> for SecIdRow {
    fn from((secid, shortname, isin): (Option<String>, Option<String>, Option<String>)) -> Self {
        Self {
            secid,
            shortname,
            isin,
        }
    }
}

/// Read-only access to the securities catalog.
///
/// The suggestion operations depend on this trait rather than on a
/// concrete HTTP client, so tests can script responses in memory.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search securities whose name contains the given fragment.
    ///
    /// Returns a single page of rows; the catalog decides the page size.
    async fn search_by_text(&self, fragment: &str) -> Result<QueryPage, CatalogError>;

    /// Fetch one page of a group listing, starting at the given zero-based
    /// row offset.
    async fn search_by_group_page(
        &self,
        group: SecurityGroup,
        page_start: u32,
    ) -> Result<QueryPage, CatalogError>;

    /// Resolve a MOEX secid by exact isin, shortname, or secid match.
    ///
    /// Returns `None` when no row matches the query exactly.
    async fn lookup_secid(&self, isin_or_name: &str) -> Result<Option<String>, CatalogError>;
}

/// Catalog client backed by the ISS REST API.
///
/// # Example
///
/// ```ignore
/// let client = MoexIssClient::new();
/// let page = client.search_by_text("Газпром").await?;
/// ```
pub struct MoexIssClient {
    client: Client,
    base_url: String,
}

impl MoexIssClient {
    /// Create a client against the public ISS endpoint.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn text_search_url(&self, fragment: &str) -> String {
        format!(
            "{}/securities.json?iss.meta=off&securities.columns={}&q={}",
            self.base_url,
            SUGGEST_COLUMNS,
            encode(fragment)
        )
    }

    fn group_page_url(&self, group: SecurityGroup, page_start: u32) -> String {
        format!(
            "{}/securities.json?iss.meta=off&securities.columns={}&group_by=group&group_by_filter={}&start={}",
            self.base_url,
            SUGGEST_COLUMNS,
            group.as_str(),
            page_start
        )
    }

    fn secid_lookup_url(&self, query: &str) -> String {
        format!(
            "{}/securities.json?iss.meta=off&securities.columns={}&start=0&limit=10&q={}",
            self.base_url,
            SECID_COLUMNS,
            encode(query)
        )
    }

    /// Make a GET request and return the raw body on success.
    async fn fetch(&self, url: &str) -> Result<String, CatalogError> {
        debug!("ISS request: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status });
        }

        Ok(response.text().await?)
    }
}

impl Default for MoexIssClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogClient for MoexIssClient {
    async fn search_by_text(&self, fragment: &str) -> Result<QueryPage, CatalogError> {
        let body = self.fetch(&self.text_search_url(fragment)).await?;
        let decoded: SuggestResponse = serde_json::from_str(&body)?;
        Ok(decoded.securities.data)
    }

    async fn search_by_group_page(
        &self,
        group: SecurityGroup,
        page_start: u32,
    ) -> Result<QueryPage, CatalogError> {
        let body = self.fetch(&self.group_page_url(group, page_start)).await?;
        let decoded: SuggestResponse = serde_json::from_str(&body)?;
        Ok(decoded.securities.data)
    }

    async fn lookup_secid(&self, isin_or_name: &str) -> Result<Option<String>, CatalogError> {
        let body = self.fetch(&self.secid_lookup_url(isin_or_name)).await?;
        let decoded: SecIdResponse = serde_json::from_str(&body)?;
        Ok(find_exact_match(decoded.securities.data, isin_or_name))
    }
}

/// Pick the secid of the first row whose isin, shortname, or secid equals
/// the query exactly.
fn find_exact_match(rows: Vec<SecIdRow>, query: &str) -> Option<String> {
    rows.into_iter()
        .find(|row| {
            row.isin.as_deref() == Some(query)
                || row.shortname.as_deref() == Some(query)
                || row.secid.as_deref() == Some(query)
        })
        .and_then(|row| row.secid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secid_row(secid: &str, shortname: &str, isin: &str) -> SecIdRow {
        SecIdRow {
            secid: Some(secid.to_string()),
            shortname: Some(shortname.to_string()),
            isin: Some(isin.to_string()),
        }
    }

    #[test]
    fn test_text_search_url_encodes_fragment() {
        let client = MoexIssClient::with_base_url("http://localhost/iss");
        assert_eq!(
            client.text_search_url("Газпром"),
            "http://localhost/iss/securities.json?iss.meta=off&securities.columns=name,isin\
             &q=%D0%93%D0%B0%D0%B7%D0%BF%D1%80%D0%BE%D0%BC"
        );
    }

    #[test]
    fn test_group_page_url() {
        let client = MoexIssClient::with_base_url("http://localhost/iss");
        assert_eq!(
            client.group_page_url(SecurityGroup::StockEtf, 200),
            "http://localhost/iss/securities.json?iss.meta=off&securities.columns=name,isin\
             &group_by=group&group_by_filter=stock_etf&start=200"
        );
    }

    #[test]
    fn test_secid_lookup_url() {
        let client = MoexIssClient::with_base_url("http://localhost/iss");
        assert_eq!(
            client.secid_lookup_url("RU0007661625"),
            "http://localhost/iss/securities.json?iss.meta=off\
             &securities.columns=secid,shortname,isin&start=0&limit=10&q=RU0007661625"
        );
    }

    #[test]
    fn test_suggest_response_deserialization() {
        let json = r#"{
            "securities": {
                "data": [
                    ["Газпром", "RU0007661625"],
                    ["Фонд Х", null]
                ]
            }
        }"#;

        let decoded: SuggestResponse = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.securities.data.len(), 2);
        assert_eq!(
            decoded.securities.data[0],
            SecurityRow::new("Газпром", "RU0007661625")
        );
        assert_eq!(decoded.securities.data[1].isin, None);
    }

    #[test]
    fn test_suggest_response_with_missing_data_field() {
        let decoded: SuggestResponse = serde_json::from_str(r#"{"securities": {}}"#).unwrap();
        assert!(decoded.securities.data.is_empty());
    }

    #[test]
    fn test_secid_response_deserialization() {
        let json = r#"{
            "securities": {
                "data": [
                    ["GAZP", "Газпром", "RU0007661625"]
                ]
            }
        }"#;

        let decoded: SecIdResponse = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.securities.data[0].secid.as_deref(), Some("GAZP"));
    }

    #[test]
    fn test_find_exact_match_by_isin() {
        let rows = vec![
            secid_row("SBER", "Сбербанк", "RU0009029540"),
            secid_row("GAZP", "Газпром", "RU0007661625"),
        ];
        assert_eq!(
            find_exact_match(rows, "RU0007661625"),
            Some("GAZP".to_string())
        );
    }

    #[test]
    fn test_find_exact_match_by_shortname() {
        let rows = vec![secid_row("GAZP", "Газпром", "RU0007661625")];
        assert_eq!(find_exact_match(rows, "Газпром"), Some("GAZP".to_string()));
    }

    #[test]
    fn test_find_exact_match_rejects_partial_match() {
        let rows = vec![secid_row("GAZP", "Газпром", "RU0007661625")];
        assert_eq!(find_exact_match(rows, "Газ"), None);
    }
}
