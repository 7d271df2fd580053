//! Metric extraction.
//!
//! Flattens the provider's audit tree into [`NormalizedMetrics`]. Every lookup
//! is optional: a missing or malformed audit yields 0, never an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::audit::{as_number, PageSpeedResponse};

use super::dom_size::extract_dom_size;
use super::seo::{extract_seo_details, SeoDetails};

/// Main-thread time and transfer size attributed to one third-party entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartyEntity {
    pub entity: String,
    /// Milliseconds
    pub main_thread_time: f64,
    /// Bytes
    pub transfer_size: f64,
}

/// Flat metrics record for one audit.
///
/// Timings are milliseconds except `cls`, which is a unitless ratio. Byte
/// fields are bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMetrics {
    // Category scores (0-100)
    pub performance: u8,
    pub accessibility: u8,
    pub best_practices: u8,
    pub seo: u8,

    // Core Web Vitals
    pub lcp: f64,
    pub cls: f64,
    /// Max potential first input delay
    pub fid: f64,

    // Other timings
    pub ttfb: f64,
    pub fcp: f64,
    pub speed_index: f64,
    pub tti: f64,
    pub tbt: f64,
    pub fmp: f64,

    // Page statistics
    pub total_size: f64,
    pub dom_size: u64,
    pub request_count: u64,
    /// Main-thread busy time
    pub js_time: f64,
    #[serde(rename = "unusedCSS")]
    pub unused_css: f64,
    #[serde(rename = "unusedJS")]
    pub unused_js: f64,
    /// Potential savings from optimizing images
    pub image_size: f64,
    /// Number of render-blocking resources
    pub render_blocking: u64,

    pub third_party: Vec<ThirdPartyEntity>,
    /// Final screenshot as a data URI
    pub screenshot: Option<String>,
    pub seo_details: Option<SeoDetails>,
}

/// Extracts the normalized metrics from a provider response.
///
/// Pure: the same input always yields the same output.
pub fn extract_metrics(raw: &PageSpeedResponse) -> NormalizedMetrics {
    let numeric = |id: &str| non_negative(raw.audit(id).and_then(|a| a.numeric_value));
    let savings_bytes =
        |id: &str| non_negative(raw.audit(id).and_then(|a| a.overall_savings_bytes()));
    let item_count = |id: &str| raw.audit(id).map_or(0, |a| a.item_count());

    NormalizedMetrics {
        performance: category_score(raw, "performance"),
        accessibility: category_score(raw, "accessibility"),
        best_practices: category_score(raw, "best-practices"),
        seo: category_score(raw, "seo"),

        lcp: numeric("largest-contentful-paint"),
        cls: numeric("cumulative-layout-shift"),
        fid: numeric("max-potential-fid"),

        ttfb: numeric("server-response-time"),
        fcp: numeric("first-contentful-paint"),
        speed_index: numeric("speed-index"),
        tti: numeric("interactive"),
        tbt: numeric("total-blocking-time"),
        fmp: numeric("first-meaningful-paint"),

        total_size: numeric("total-byte-weight"),
        dom_size: extract_dom_size(raw),
        request_count: item_count("network-requests"),
        js_time: numeric("mainthread-work-breakdown"),
        unused_css: savings_bytes("unused-css-rules"),
        unused_js: savings_bytes("unused-javascript"),
        image_size: savings_bytes("uses-optimized-images"),
        render_blocking: item_count("render-blocking-resources"),

        third_party: extract_third_party(raw),
        screenshot: raw
            .audit("final-screenshot")
            .and_then(|a| a.details.as_ref())
            .and_then(|d| d.data.clone()),
        seo_details: extract_seo_details(raw),
    }
}

/// Category score scaled to 0-100, or 0 when the category is absent.
pub(crate) fn category_score(raw: &PageSpeedResponse, id: &str) -> u8 {
    match raw.category_score(id) {
        Some(score) if score.is_finite() => (score * 100.0).round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

fn non_negative(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0)
}

fn extract_third_party(raw: &PageSpeedResponse) -> Vec<ThirdPartyEntity> {
    raw.audit("third-party-summary")
        .and_then(|a| a.items())
        .map(|items| items.iter().filter_map(third_party_entity).collect())
        .unwrap_or_default()
}

fn third_party_entity(item: &Value) -> Option<ThirdPartyEntity> {
    let item = item.as_object()?;
    // Newer reports use {"type": "link", "text": ..., "url": ...} for the entity
    let entity = match item.get("entity") {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Object(link)) => link
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    };
    let number = |key: &str| non_negative(item.get(key).and_then(as_number));
    Some(ThirdPartyEntity {
        entity,
        main_thread_time: number("mainThreadTime"),
        transfer_size: number("transferSize"),
    })
}
