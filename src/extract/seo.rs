//! SEO checklist extraction.

use serde::{Deserialize, Serialize};

use crate::audit::{Audit, PageSpeedResponse};

use super::metrics::category_score;

/// Audits that feed the SEO checklist.
const SEO_AUDITS: &[&str] = &[
    "document-title",
    "meta-description",
    "viewport",
    "robots-txt",
    "canonical",
    "hreflang",
    "image-alt",
    "link-text",
    "structured-data",
];

/// Result of a single pass/fail SEO audit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoCheck {
    /// Audit score (0..1), `None` when the audit is missing or not scored
    pub score: Option<f64>,
    pub description: String,
}

/// SEO audit that also counts offending elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoElementCheck {
    pub score: Option<f64>,
    /// Number of elements failing the check
    pub missing: u64,
    pub description: String,
}

/// Condensed SEO checklist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoDetails {
    pub document_title: SeoCheck,
    pub meta_description: SeoCheck,
    pub viewport: SeoCheck,
    pub robots_txt: SeoCheck,
    pub canonical: SeoCheck,
    pub hreflang: SeoCheck,
    /// Images without alt text
    pub image_alt: SeoElementCheck,
    /// Links without descriptive text
    pub link_text: SeoElementCheck,
    pub structured_data: SeoCheck,
    /// SEO category score (0-100)
    pub summary_score: u8,
}

/// Builds the SEO checklist, or `None` when the report has no SEO data at all.
pub fn extract_seo_details(raw: &PageSpeedResponse) -> Option<SeoDetails> {
    let has_audits = SEO_AUDITS.iter().any(|id| raw.audit(id).is_some());
    if !has_audits && raw.category_score("seo").is_none() {
        return None;
    }

    let check = |id: &str| {
        let audit = raw.audit(id);
        SeoCheck {
            score: audit.and_then(|a| a.score),
            description: description(audit),
        }
    };
    let element_check = |id: &str| {
        let audit = raw.audit(id);
        SeoElementCheck {
            score: audit.and_then(|a| a.score),
            missing: audit.map_or(0, Audit::item_count),
            description: description(audit),
        }
    };

    Some(SeoDetails {
        document_title: check("document-title"),
        meta_description: check("meta-description"),
        viewport: check("viewport"),
        robots_txt: check("robots-txt"),
        canonical: check("canonical"),
        hreflang: check("hreflang"),
        image_alt: element_check("image-alt"),
        link_text: element_check("link-text"),
        structured_data: check("structured-data"),
        summary_score: category_score(raw, "seo"),
    })
}

fn description(audit: Option<&Audit>) -> String {
    audit
        .and_then(|a| a.description.clone())
        .unwrap_or_default()
}
