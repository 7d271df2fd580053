//! Three-tier verdicts, matching Lighthouse's published scoring boundaries.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::extract::NormalizedMetrics;

/// Verdict shared by every score and metric in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    #[strum(serialize = "Good")]
    Good,
    #[strum(serialize = "Needs improvement")]
    NeedsImprovement,
    #[strum(serialize = "Poor")]
    Poor,
}

/// Classifies a higher-is-better score (0-100).
pub fn classify_score(score: u8) -> Verdict {
    match score {
        90.. => Verdict::Good,
        50..=89 => Verdict::NeedsImprovement,
        _ => Verdict::Poor,
    }
}

/// Upper bounds for a lower-is-better metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// At or below is good
    pub good: f64,
    /// At or below (and above `good`) needs improvement
    pub ok: f64,
}

/// Classifies a lower-is-better value against its bounds.
pub fn classify_timing(value: f64, thresholds: Thresholds) -> Verdict {
    if value <= thresholds.good {
        Verdict::Good
    } else if value <= thresholds.ok {
        Verdict::NeedsImprovement
    } else {
        Verdict::Poor
    }
}

/// Lower-is-better metrics shown in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum TimedMetric {
    LargestContentfulPaint,
    CumulativeLayoutShift,
    TotalBlockingTime,
    TimeToFirstByte,
    FirstContentfulPaint,
    SpeedIndex,
    TimeToInteractive,
    FirstMeaningfulPaint,
    MaxPotentialFid,
}

impl TimedMetric {
    pub fn thresholds(&self) -> Thresholds {
        let (good, ok) = match self {
            TimedMetric::LargestContentfulPaint => (2500.0, 4000.0),
            TimedMetric::CumulativeLayoutShift => (0.1, 0.25),
            TimedMetric::TotalBlockingTime => (200.0, 600.0),
            TimedMetric::TimeToFirstByte => (800.0, 1800.0),
            TimedMetric::FirstContentfulPaint => (1800.0, 3000.0),
            TimedMetric::SpeedIndex => (3400.0, 5800.0),
            TimedMetric::TimeToInteractive => (3800.0, 7300.0),
            TimedMetric::FirstMeaningfulPaint => (2000.0, 4000.0),
            TimedMetric::MaxPotentialFid => (100.0, 300.0),
        };
        Thresholds { good, ok }
    }

    pub fn classify(&self, value: f64) -> Verdict {
        classify_timing(value, self.thresholds())
    }

    /// LCP, CLS and TBT; reported in their own section.
    pub fn is_core_web_vital(&self) -> bool {
        matches!(
            self,
            TimedMetric::LargestContentfulPaint
                | TimedMetric::CumulativeLayoutShift
                | TimedMetric::TotalBlockingTime
        )
    }

    /// Reads this metric from a normalized record.
    ///
    /// Newer Lighthouse versions no longer report FMP, so a missing FMP reads
    /// as FCP.
    pub fn value(&self, metrics: &NormalizedMetrics) -> f64 {
        match self {
            TimedMetric::LargestContentfulPaint => metrics.lcp,
            TimedMetric::CumulativeLayoutShift => metrics.cls,
            TimedMetric::TotalBlockingTime => metrics.tbt,
            TimedMetric::TimeToFirstByte => metrics.ttfb,
            TimedMetric::FirstContentfulPaint => metrics.fcp,
            TimedMetric::SpeedIndex => metrics.speed_index,
            TimedMetric::TimeToInteractive => metrics.tti,
            TimedMetric::FirstMeaningfulPaint if metrics.fmp > 0.0 => metrics.fmp,
            TimedMetric::FirstMeaningfulPaint => metrics.fcp,
            TimedMetric::MaxPotentialFid => metrics.fid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimedMetric::LargestContentfulPaint => "Largest Contentful Paint (LCP)",
            TimedMetric::CumulativeLayoutShift => "Cumulative Layout Shift (CLS)",
            TimedMetric::TotalBlockingTime => "Total Blocking Time (TBT)",
            TimedMetric::TimeToFirstByte => "Time to First Byte",
            TimedMetric::FirstContentfulPaint => "First Contentful Paint",
            TimedMetric::SpeedIndex => "Speed Index",
            TimedMetric::TimeToInteractive => "Time to Interactive",
            TimedMetric::FirstMeaningfulPaint => "First Meaningful Paint",
            TimedMetric::MaxPotentialFid => "Max Potential FID",
        }
    }

    /// Short hint printed after the verdict.
    pub fn note(&self) -> &'static str {
        match self {
            TimedMetric::LargestContentfulPaint => "Target < 2.5s",
            TimedMetric::CumulativeLayoutShift => "Target < 0.1",
            TimedMetric::TotalBlockingTime => "Target < 200ms",
            TimedMetric::TimeToFirstByte => "Server response time",
            TimedMetric::FirstContentfulPaint => "First visual response",
            TimedMetric::SpeedIndex => "Content visibility speed",
            TimedMetric::TimeToInteractive => "Full interactivity",
            TimedMetric::FirstMeaningfulPaint => "Primary content visible",
            TimedMetric::MaxPotentialFid => "Worst-case input delay",
        }
    }
}

/// Overall band for the performance score, with matching advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceRating {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl PerformanceRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => PerformanceRating::Excellent,
            75..=89 => PerformanceRating::Good,
            50..=74 => PerformanceRating::Moderate,
            _ => PerformanceRating::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceRating::Excellent => "Excellent Performance",
            PerformanceRating::Good => "Good Performance",
            PerformanceRating::Moderate => "Moderate Performance",
            PerformanceRating::Poor => "Poor Performance",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            PerformanceRating::Excellent => {
                "Your site is highly optimized. Continue monitoring and maintain best practices."
            }
            PerformanceRating::Good => {
                "Your site performs well. Focus on the improvement opportunities highlighted below."
            }
            PerformanceRating::Moderate => {
                "There's room for improvement. Prioritize the high-impact opportunities."
            }
            PerformanceRating::Poor => {
                "Significant optimization needed. Start with the critical opportunities."
            }
        }
    }
}
