//! Savings opportunities.

use serde::{Deserialize, Serialize};

use crate::audit::PageSpeedResponse;
use crate::config::OPPORTUNITY_NOISE_FLOOR_MS;

/// An audit the provider flags as a way to save load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub title: String,
    pub description: String,
    /// Estimated savings in milliseconds
    pub savings: f64,
}

/// Collects opportunity audits saving more than 100 ms, largest savings first.
///
/// The full list is returned; truncation is left to the report.
pub fn extract_opportunities(raw: &PageSpeedResponse) -> Vec<Opportunity> {
    let mut opportunities: Vec<Opportunity> = raw
        .audits()
        .filter(|(_, audit)| audit.is_opportunity())
        .filter_map(|(_, audit)| {
            let savings = audit.numeric_value.filter(|v| v.is_finite())?;
            (savings > OPPORTUNITY_NOISE_FLOOR_MS).then(|| Opportunity {
                title: audit.title.clone().unwrap_or_default(),
                description: audit.description.clone().unwrap_or_default(),
                savings,
            })
        })
        .collect();
    // Stable sort: ties keep document order
    opportunities.sort_by(|a, b| b.savings.total_cmp(&a.savings));
    opportunities
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> PageSpeedResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_sorted_descending_and_filtered() {
        let raw = parse(json!({"lighthouseResult": {"audits": {
            "render-blocking-resources": {
                "title": "Eliminate render-blocking resources",
                "numericValue": 870,
                "details": {"type": "opportunity"}
            },
            "unused-javascript": {
                "title": "Reduce unused JavaScript",
                "description": "Reduce unused JavaScript and defer loading scripts.",
                "numericValue": 2150,
                "details": {"type": "opportunity"}
            },
            "uses-text-compression": {
                "title": "Enable text compression",
                "numericValue": 100,
                "details": {"type": "opportunity"}
            },
            "server-response-time": {
                "title": "Initial server response time was short",
                "numericValue": 5000,
                "details": {"type": "opportunity-less"}
            },
            "bootup-time": {
                "title": "Reduce JavaScript execution time",
                "numericValue": 1900,
                "details": {"type": "table"}
            }
        }}}));

        let ops = extract_opportunities(&raw);
        let titles: Vec<&str> = ops.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Reduce unused JavaScript",
                "Eliminate render-blocking resources"
            ]
        );
        assert_eq!(
            ops[0].description,
            "Reduce unused JavaScript and defer loading scripts."
        );
        assert_eq!(ops[1].description, "");
        assert!(ops.windows(2).all(|w| w[0].savings >= w[1].savings));
        assert!(ops.iter().all(|o| o.savings > 100.0));
    }

    #[test]
    fn test_missing_numeric_value_is_skipped() {
        let raw = parse(json!({"lighthouseResult": {"audits": {
            "modern-image-formats": {"details": {"type": "opportunity"}}
        }}}));
        assert!(extract_opportunities(&raw).is_empty());
    }

    #[test]
    fn test_ties_keep_document_order() {
        let raw = PageSpeedResponse::from_json(
            r#"{"lighthouseResult": {"audits": {
                "b-audit": {"title": "B", "numericValue": 300, "details": {"type": "opportunity"}},
                "a-audit": {"title": "A", "numericValue": 300, "details": {"type": "opportunity"}},
                "c-audit": {"title": "C", "numericValue": 900, "details": {"type": "opportunity"}}
            }}}"#,
        )
        .unwrap();
        let titles: Vec<String> = extract_opportunities(&raw)
            .into_iter()
            .map(|o| o.title)
            .collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }
}
