//! DOM node count lookup.
//!
//! The provider has reported the DOM size in several shapes across Lighthouse
//! versions. Each shape is a strategy; they are tried in order and the first
//! match wins. When none match the count is 0.

use log::debug;
use serde_json::Value;

use crate::audit::{as_number, is_truthy, PageSpeedResponse};

/// A single way of finding the DOM node count.
type DomSizeStrategy = fn(&PageSpeedResponse) -> Option<f64>;

/// Item keys that may hold the count, in lookup order.
const ITEM_CANDIDATE_KEYS: &[&str] = &["value", "count", "nodes", "total", "size"];

/// Strategies in the order they are tried.
const DOM_SIZE_STRATEGIES: &[(&str, DomSizeStrategy)] = &[
    ("dom-size numericValue", from_numeric_value),
    ("dom-size overallDomCount", from_overall_dom_count),
    ("dom-size items", from_detail_items),
    ("fullPageScreenshot", from_full_page_screenshot),
    ("full-page-screenshot audit", from_screenshot_audit),
];

/// Returns the DOM node count, or 0 when no strategy matches.
pub fn extract_dom_size(raw: &PageSpeedResponse) -> u64 {
    for (name, strategy) in DOM_SIZE_STRATEGIES {
        if let Some(count) = strategy(raw) {
            debug!("DOM size {} taken from {}", count, name);
            return to_count(count);
        }
    }
    debug!("DOM size not found in any known location, defaulting to 0");
    0
}

fn to_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

fn from_numeric_value(raw: &PageSpeedResponse) -> Option<f64> {
    raw.audit("dom-size")?.numeric_value
}

fn from_overall_dom_count(raw: &PageSpeedResponse) -> Option<f64> {
    raw.audit("dom-size")?
        .details
        .as_ref()?
        .overall_dom_count
        .filter(|count| *count != 0.0)
}

fn from_detail_items(raw: &PageSpeedResponse) -> Option<f64> {
    raw.audit("dom-size")?.items()?.iter().find_map(item_count)
}

fn item_count(item: &Value) -> Option<f64> {
    let item = item.as_object()?;
    if let Some(n) = ITEM_CANDIDATE_KEYS
        .iter()
        .find_map(|key| item.get(*key).and_then(as_number))
    {
        return Some(n);
    }
    match item.get("statistic")? {
        Value::Object(statistic) => statistic.get("value").and_then(as_number),
        Value::String(text) => parse_statistic(text),
        _ => None,
    }
}

/// Numeric reading of a statistic string; a blank string reads as 0.
fn parse_statistic(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn from_full_page_screenshot(raw: &PageSpeedResponse) -> Option<f64> {
    let lighthouse = raw.lighthouse_result.as_ref();
    let screenshot = [
        lighthouse.and_then(|lr| lr.full_page_screenshot.as_ref()),
        lighthouse.and_then(|lr| lr.full_page_screenshot_legacy.as_ref()),
        raw.full_page_screenshot.as_ref(),
    ]
    .into_iter()
    .flatten()
    .find(|value| is_truthy(value))?;

    let nodes = screenshot
        .get("nodes")
        .filter(|nodes| is_truthy(nodes))
        .or_else(|| screenshot.get("screenshot")?.get("nodes"))
        .filter(|nodes| is_truthy(nodes));

    match nodes {
        Some(Value::Array(list)) => return Some(list.len() as f64),
        Some(Value::Object(map)) => return Some(map.len() as f64),
        _ => {}
    }
    screenshot
        .get("total")
        .and_then(as_number)
        .or_else(|| screenshot.get("nodeCount").and_then(as_number))
}

fn from_screenshot_audit(raw: &PageSpeedResponse) -> Option<f64> {
    let details = raw.audit("full-page-screenshot")?.details.as_ref()?;
    if let Some(Value::Array(nodes)) = &details.nodes {
        return Some(nodes.len() as f64);
    }
    details.items.as_ref().map(|items| items.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> PageSpeedResponse {
        serde_json::from_value(value).unwrap()
    }

    fn with_audits(audits: Value) -> PageSpeedResponse {
        response(json!({"lighthouseResult": {"audits": audits}}))
    }

    #[test]
    fn test_numeric_value_wins() {
        let raw = with_audits(json!({
            "dom-size": {"numericValue": 812, "details": {"overallDomCount": 5}}
        }));
        assert_eq!(extract_dom_size(&raw), 812);
    }

    #[test]
    fn test_overall_dom_count() {
        let raw = with_audits(json!({"dom-size": {"details": {"overallDomCount": 1450}}}));
        assert_eq!(extract_dom_size(&raw), 1450);
    }

    #[test]
    fn test_zero_overall_count_falls_through_to_items() {
        let raw = with_audits(json!({
            "dom-size": {"details": {"overallDomCount": 0, "items": [{"value": 33}]}}
        }));
        assert_eq!(extract_dom_size(&raw), 33);
    }

    #[test]
    fn test_items_candidate_key_order() {
        let raw = with_audits(json!({
            "dom-size": {"details": {"items": [{"size": 1, "count": 2, "total": 3}]}}
        }));
        // "count" comes before "total" and "size"
        assert_eq!(extract_dom_size(&raw), 2);
    }

    #[test]
    fn test_items_skip_non_matching_entries() {
        let raw = with_audits(json!({
            "dom-size": {"details": {"items": [
                {"statistic": "Total DOM Elements"},
                {"node": {"type": "node"}},
                {"statistic": {"value": 640}}
            ]}}
        }));
        assert_eq!(extract_dom_size(&raw), 640);
    }

    #[test]
    fn test_items_statistic_string() {
        let raw = with_audits(json!({
            "dom-size": {"details": {"items": [{"statistic": "1,234"}, {"statistic": " 987 "}]}}
        }));
        assert_eq!(extract_dom_size(&raw), 987);
    }

    #[test]
    fn test_full_page_screenshot_nodes_array() {
        let raw = response(json!({
            "lighthouseResult": {
                "audits": {},
                "fullPageScreenshot": {"nodes": [{}, {}, {}]}
            }
        }));
        assert_eq!(extract_dom_size(&raw), 3);
    }

    #[test]
    fn test_full_page_screenshot_nodes_object() {
        let raw = response(json!({
            "lighthouseResult": {
                "fullPageScreenshot": {"screenshot": {"data": "x"}, "nodes": {"a": {}, "b": {}}}
            }
        }));
        assert_eq!(extract_dom_size(&raw), 2);
    }

    #[test]
    fn test_legacy_and_top_level_screenshot() {
        let raw = response(json!({
            "lighthouseResult": {"full_page_screenshot": {"nodeCount": 77}}
        }));
        assert_eq!(extract_dom_size(&raw), 77);

        let raw = response(json!({"fullPageScreenshot": {"total": 91}}));
        assert_eq!(extract_dom_size(&raw), 91);
    }

    #[test]
    fn test_screenshot_audit_fallback() {
        let raw = with_audits(json!({
            "full-page-screenshot": {"details": {"nodes": [1, 2, 3, 4]}}
        }));
        assert_eq!(extract_dom_size(&raw), 4);

        let raw = with_audits(json!({
            "full-page-screenshot": {"details": {"items": [1, 2]}}
        }));
        assert_eq!(extract_dom_size(&raw), 2);
    }

    #[test]
    fn test_defaults_to_zero() {
        assert_eq!(extract_dom_size(&response(json!({}))), 0);
        assert_eq!(extract_dom_size(&with_audits(json!({"dom-size": {}}))), 0);
    }
}
