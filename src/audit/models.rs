//! Typed view of the PageSpeed Insights response document.
//!
//! Every field is optional. The provider owns this schema; these types only
//! read it.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::decode::{lenient, lenient_map, lenient_score};

/// Top-level PageSpeed Insights response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpeedResponse {
    /// Lighthouse report, absent on provider errors
    #[serde(default, deserialize_with = "lenient")]
    pub lighthouse_result: Option<LighthouseResult>,

    /// Some responses carry the full-page screenshot at the top level
    #[serde(default)]
    pub full_page_screenshot: Option<Value>,

    /// Provider error body (`{"error": {"code": 403, "message": "..."}}`)
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<ProviderErrorBody>,
}

impl PageSpeedResponse {
    /// Parses a response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Looks up an audit by its identifier.
    pub fn audit(&self, id: &str) -> Option<&Audit> {
        self.lighthouse_result
            .as_ref()?
            .audits
            .iter()
            .find_map(|(key, audit)| (key == id).then_some(audit))
    }

    /// Looks up a category score (0..1) by category identifier.
    pub fn category_score(&self, id: &str) -> Option<f64> {
        self.lighthouse_result.as_ref()?.categories.get(id)?.score
    }

    /// All audits with their identifiers, in document order. Empty when there
    /// is no Lighthouse result.
    pub fn audits(&self) -> impl Iterator<Item = (&str, &Audit)> {
        self.lighthouse_result
            .iter()
            .flat_map(|result| result.audits.iter())
            .map(|(id, audit)| (id.as_str(), audit))
    }
}

/// Error object returned by the provider instead of a report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
}

/// The `lighthouseResult` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseResult {
    #[serde(default, deserialize_with = "lenient_map")]
    pub categories: BTreeMap<String, Category>,

    /// Audits in document order
    #[serde(default, deserialize_with = "lenient_map")]
    pub audits: Vec<(String, Audit)>,

    #[serde(default)]
    pub full_page_screenshot: Option<Value>,

    /// Older reports used a snake_case key
    #[serde(default, rename = "full_page_screenshot")]
    pub full_page_screenshot_legacy: Option<Value>,
}

/// One report category (performance, accessibility, best-practices, seo).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
}

/// One Lighthouse audit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub numeric_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub details: Option<AuditDetails>,
}

impl Audit {
    /// `details.items`, when present.
    pub fn items(&self) -> Option<&[Value]> {
        self.details.as_ref()?.items.as_deref()
    }

    /// Number of `details.items`, 0 when absent.
    pub fn item_count(&self) -> u64 {
        self.items().map_or(0, |items| items.len() as u64)
    }

    /// `details.overallSavingsBytes`, when present.
    pub fn overall_savings_bytes(&self) -> Option<f64> {
        self.details.as_ref()?.overall_savings_bytes
    }

    /// Whether `details.type` is `"opportunity"`.
    pub fn is_opportunity(&self) -> bool {
        self.details
            .as_ref()
            .and_then(|d| d.kind.as_deref())
            .is_some_and(|kind| kind == "opportunity")
    }
}

/// The free-form `details` payload of an audit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDetails {
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub items: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub overall_savings_bytes: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub overall_savings_ms: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub overall_dom_count: Option<f64>,
    /// Embedded image (data URI) on screenshot audits
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<String>,
    #[serde(default)]
    pub nodes: Option<Value>,
}
