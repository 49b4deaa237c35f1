use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::LazyLock;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("HTML tag pattern is valid"));

/// Identifier of a catalog entry.
///
/// The listing endpoint is not consistent about ids: some records carry a
/// number, others a string. Both are normalized to their string form.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::new(id)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = match RawId::deserialize(deserializer)? {
            RawId::Integer(n) => n.to_string(),
            RawId::Float(f) => f.to_string(),
            RawId::Text(s) => s,
        };
        Ok(ProductId(id))
    }
}

/// Body returned by the listing endpoint.
///
/// Entries are kept raw so one malformed record does not sink the whole
/// catalog; see [`CatalogResponse::into_records`].
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CatalogResponse {
    #[serde(default)]
    pub sneakers: Option<Vec<serde_json::Value>>,
}

impl CatalogResponse {
    /// Entries that do not deserialize as a [`ProductRecord`] are dropped.
    pub fn into_records(self) -> Vec<ProductRecord> {
        let mut records = Vec::new();
        for entry in self.sneakers.unwrap_or_default() {
            match serde_json::from_value::<ProductRecord>(entry) {
                Ok(record) => records.push(record),
                Err(e) => {
                    log::info!("Skipping invalid sneaker record: {}", e);
                    continue;
                }
            }
        }
        records
    }
}

/// One sneaker listing. Every attribute is optional; unknown attributes are
/// kept in `extra`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProductRecord {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub retail_price_cents: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub shoe_condition: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub story_html: Option<String>,
    #[serde(default)]
    pub grid_picture_url: Option<String>,
    #[serde(default)]
    pub main_picture_url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProductRecord {
    pub fn display_brand(&self) -> &str {
        non_empty(&self.brand_name).unwrap_or("Unknown Brand")
    }

    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or("Product Name")
    }

    pub fn display_color(&self) -> &str {
        non_empty(&self.color).unwrap_or("N/A")
    }

    /// Retail price in dollars, zero when the record has no price.
    pub fn price(&self) -> f64 {
        self.retail_price_cents.unwrap_or(0.0) / 100.0
    }

    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price())
    }

    /// `new_no_defects` becomes `new no defects`.
    pub fn condition_label(&self) -> Option<String> {
        non_empty(&self.shoe_condition).map(|c| c.replace('_', " "))
    }

    /// Story with markup stripped.
    pub fn story_text(&self) -> Option<String> {
        let html = non_empty(&self.story_html)?;
        let text = HTML_TAG.replace_all(html, "");
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Release date, accepting either a full RFC 3339 timestamp or a bare date.
    pub fn release_date(&self) -> Option<Date> {
        let raw = non_empty(&self.release_date)?;
        if let Ok(timestamp) = OffsetDateTime::parse(raw, &Rfc3339) {
            return Some(timestamp.date());
        }
        Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
    }

    /// Picture for grid tiles, falling back to the main picture.
    pub fn thumbnail_url(&self) -> Option<&str> {
        non_empty(&self.grid_picture_url).or_else(|| non_empty(&self.main_picture_url))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn sample() -> Vec<ProductRecord> {
        let input = include_str!("../../test_data/catalog_sample.json");
        let response: CatalogResponse = serde_json::from_str(input).unwrap();
        response.into_records()
    }

    #[test]
    fn test_full_record_parsing() {
        let records = sample();
        assert_eq!(records.len(), 3);

        let jordan = &records[0];
        assert_eq!(jordan.id, Some(ProductId::new("2")));
        assert_eq!(jordan.display_brand(), "Air Jordan");
        assert_eq!(jordan.formatted_price(), "$170.00");
        assert_eq!(jordan.condition_label().as_deref(), Some("new no defects"));
        assert_eq!(
            jordan.story_text().as_deref(),
            Some("The Air Jordan 1 Retro High OG Bio Hack arrived in December.")
        );
        assert_eq!(jordan.thumbnail_url(), Some("https://example.com/grid/2.png"));
        assert_eq!(
            jordan.extra.get("nickname").and_then(|v| v.as_str()),
            Some("Bio Hack")
        );
        assert!(jordan.extra.contains_key("size_range"));

        let date = jordan.release_date().unwrap();
        assert_eq!(date.year(), 2020);
        assert_eq!(date.month(), Month::December);
    }

    #[test]
    fn test_string_id_and_bare_date() {
        let records = sample();
        let dunk = &records[1];
        assert_eq!(dunk.id, Some(ProductId::new("sb-dunk-77")));
        assert_eq!(dunk.display_color(), "N/A");
        assert_eq!(dunk.release_date().map(|d| d.day()), Some(30));
        assert_eq!(dunk.story_text(), None);
    }

    #[test]
    fn test_sparse_record_uses_fallbacks() {
        let records = sample();
        let sparse = &records[2];
        assert_eq!(sparse.id, None);
        assert_eq!(sparse.display_name(), "Mystery Runner");
        assert_eq!(sparse.display_brand(), "Unknown Brand");
        assert_eq!(sparse.formatted_price(), "$0.00");
        assert_eq!(sparse.condition_label(), None);
        assert_eq!(sparse.release_date(), None);
        assert_eq!(sparse.thumbnail_url(), None);
    }

    #[test]
    fn test_missing_sneakers_key_is_empty_catalog() {
        let response: CatalogResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_records().is_empty());

        let response: CatalogResponse = serde_json::from_str(r#"{"sneakers": null}"#).unwrap();
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let input = r#"{"sneakers": [
            {"id": 1, "name": "ok"},
            {"id": 2, "retail_price_cents": "170"},
            {"id": true},
            "not a record",
            {"id": "x-4", "name": "also ok"}
        ]}"#;
        let response: CatalogResponse = serde_json::from_str(input).unwrap();
        let records = response.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Some(ProductId::from(1u64)));
        assert_eq!(records[1].display_name(), "also ok");
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let result = serde_json::from_str::<CatalogResponse>(r#"{"sneakers": "nope"}"#);
        assert!(result.is_err());
    }
}
