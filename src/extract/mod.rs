//! Extraction from the raw audit document.
//!
//! This module provides:
//! - [`extract_metrics`]: the flat metrics record
//! - [`extract_opportunities`]: savings opportunities, largest first
//!
//! Extraction is pure and never fails; absent data reads as 0 or `None`.

mod dom_size;
mod metrics;
mod opportunities;
mod seo;

// Re-export public API
pub use dom_size::extract_dom_size;
pub use metrics::{extract_metrics, NormalizedMetrics, ThirdPartyEntity};
pub use opportunities::{extract_opportunities, Opportunity};
pub use seo::{extract_seo_details, SeoCheck, SeoDetails, SeoElementCheck};
