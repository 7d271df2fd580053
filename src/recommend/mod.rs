//! Recommendations and verdicts derived from normalized metrics.
//!
//! Recommendation rules are independent "over threshold, show tip" checks;
//! none suppresses another.

mod classify;

use serde::{Serialize, Serializer};

use crate::config::{
    CLS_RECOMMENDATION, LCP_RECOMMENDATION_MS, REQUEST_COUNT_RECOMMENDATION,
    TBT_RECOMMENDATION_MS, TOTAL_SIZE_RECOMMENDATION_BYTES, UNUSED_CSS_RECOMMENDATION_BYTES,
};
use crate::extract::NormalizedMetrics;

pub use classify::{
    classify_score, classify_timing, PerformanceRating, Thresholds, TimedMetric, Verdict,
};

/// A fixed piece of advice, selected by threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    OptimizeLcp,
    FixLayoutShifts,
    ReduceBlockingTime,
    RemoveUnusedCss,
    ReducePageWeight,
    ReduceRequests,
}

impl Recommendation {
    pub fn title(&self) -> &'static str {
        match self {
            Recommendation::OptimizeLcp => "Optimize LCP",
            Recommendation::FixLayoutShifts => "Fix layout shifts",
            Recommendation::ReduceBlockingTime => "Reduce blocking time",
            Recommendation::RemoveUnusedCss => "Remove unused CSS",
            Recommendation::ReducePageWeight => "Reduce page weight",
            Recommendation::ReduceRequests => "Reduce requests",
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            Recommendation::OptimizeLcp => {
                "Consider lazy loading, optimizing server response, and using a CDN"
            }
            Recommendation::FixLayoutShifts => "Set explicit dimensions for images and embeds",
            Recommendation::ReduceBlockingTime => {
                "Split large JavaScript bundles and defer non-critical JS"
            }
            Recommendation::RemoveUnusedCss => "Use tools like PurgeCSS to eliminate dead code",
            Recommendation::ReducePageWeight => "Compress images and minify assets",
            Recommendation::ReduceRequests => "Bundle assets and implement resource hints",
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{}: {}", self.title(), self.detail()))
    }
}

/// Returns one recommendation per rule whose threshold is exceeded, in display order.
pub fn derive_recommendations(metrics: &NormalizedMetrics) -> Vec<Recommendation> {
    let rules = [
        (metrics.lcp > LCP_RECOMMENDATION_MS, Recommendation::OptimizeLcp),
        (metrics.cls > CLS_RECOMMENDATION, Recommendation::FixLayoutShifts),
        (metrics.tbt > TBT_RECOMMENDATION_MS, Recommendation::ReduceBlockingTime),
        (
            metrics.unused_css > UNUSED_CSS_RECOMMENDATION_BYTES,
            Recommendation::RemoveUnusedCss,
        ),
        (
            metrics.total_size > TOTAL_SIZE_RECOMMENDATION_BYTES,
            Recommendation::ReducePageWeight,
        ),
        (
            metrics.request_count > REQUEST_COUNT_RECOMMENDATION,
            Recommendation::ReduceRequests,
        ),
    ];
    rules
        .into_iter()
        .filter_map(|(applies, recommendation)| applies.then_some(recommendation))
        .collect()
}
