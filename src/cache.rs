//! Per-profile audit results.
//!
//! [`ResultCache`] is owned by the caller and passed through the runner, so
//! the mobile and desktop results of one session can sit side by side.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;

use crate::audit::PageSpeedResponse;
use crate::config::Strategy;
use crate::extract::{extract_metrics, extract_opportunities, NormalizedMetrics, Opportunity};
use crate::recommend::{derive_recommendations, Recommendation};

/// Everything derived from one audit of one URL and profile.
///
/// Immutable once built; serializes to the bundle a history store would keep.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub url: String,
    pub strategy: Strategy,
    /// Completion time, milliseconds since the Unix epoch (UTC)
    #[serde(rename = "ts")]
    pub timestamp_ms: i64,
    pub metrics: NormalizedMetrics,
    pub opportunities: Vec<Opportunity>,
    pub recommendations: Vec<Recommendation>,
}

impl AuditResult {
    /// Runs every extractor over a provider response.
    pub fn from_response(url: &str, strategy: Strategy, raw: &PageSpeedResponse) -> Self {
        let metrics = extract_metrics(raw);
        let opportunities = extract_opportunities(raw);
        let recommendations = derive_recommendations(&metrics);
        Self {
            url: url.to_string(),
            strategy,
            timestamp_ms: Utc::now().timestamp_millis(),
            metrics,
            opportunities,
            recommendations,
        }
    }
}

/// Results keyed by device profile; at most one per profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultCache {
    results: BTreeMap<Strategy, AuditResult>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a result under its profile, returning the one it replaces.
    pub fn insert(&mut self, result: AuditResult) -> Option<AuditResult> {
        self.results.insert(result.strategy, result)
    }

    pub fn get(&self, strategy: Strategy) -> Option<&AuditResult> {
        self.results.get(&strategy)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results in profile order (mobile, then desktop).
    pub fn iter(&self) -> impl Iterator<Item = &AuditResult> {
        self.results.values()
    }
}

impl Serialize for ResultCache {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.results.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(strategy: Strategy, performance: f64) -> AuditResult {
        let raw: PageSpeedResponse = serde_json::from_value(json!({
            "lighthouseResult": {"categories": {"performance": {"score": performance}}}
        }))
        .unwrap();
        AuditResult::from_response("https://example.com/", strategy, &raw)
    }

    #[test]
    fn test_profiles_coexist() {
        let mut cache = ResultCache::new();
        assert!(cache.is_empty());
        cache.insert(result(Strategy::Desktop, 0.97));
        cache.insert(result(Strategy::Mobile, 0.61));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(Strategy::Mobile).unwrap().metrics.performance, 61);
        assert_eq!(cache.get(Strategy::Desktop).unwrap().metrics.performance, 97);

        let order: Vec<Strategy> = cache.iter().map(|r| r.strategy).collect();
        assert_eq!(order, vec![Strategy::Mobile, Strategy::Desktop]);
    }

    #[test]
    fn test_insert_replaces_same_profile() {
        let mut cache = ResultCache::new();
        assert!(cache.insert(result(Strategy::Mobile, 0.40)).is_none());
        let replaced = cache.insert(result(Strategy::Mobile, 0.55)).unwrap();
        assert_eq!(replaced.metrics.performance, 40);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(Strategy::Mobile).unwrap().metrics.performance, 55);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut cache = ResultCache::new();
        cache.insert(result(Strategy::Mobile, 0.5));
        let value = serde_json::to_value(&cache).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["strategy"], "mobile");
        assert_eq!(entries[0]["url"], "https://example.com/");
        assert_eq!(entries[0]["metrics"]["performance"], 50);
        assert!(entries[0]["ts"].as_i64().unwrap() > 0);
    }
}
