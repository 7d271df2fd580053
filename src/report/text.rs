//! Terminal report.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use strum::IntoEnumIterator;

use crate::cache::AuditResult;
use crate::config::REPORT_TOP_N;
use crate::extract::{NormalizedMetrics, SeoCheck, SeoDetails, SeoElementCheck};
use crate::recommend::{classify_score, PerformanceRating, TimedMetric, Verdict};

use super::format::{format_bytes, format_time};

const LABEL_WIDTH: usize = 34;

/// Writes the full report for one audit result.
pub fn write_report<W: Write>(out: &mut W, result: &AuditResult) -> io::Result<()> {
    let m = &result.metrics;
    writeln!(
        out,
        "{} {} ({})",
        "Results for".bold(),
        result.url.bold(),
        result.strategy
    )?;

    heading(out, "Overall Scores")?;
    for (label, score) in [
        ("Performance", m.performance),
        ("Accessibility", m.accessibility),
        ("Best Practices", m.best_practices),
        ("SEO", m.seo),
    ] {
        writeln!(
            out,
            "  {:<LABEL_WIDTH$}{:>7}  {}",
            label,
            format!("{score}/100"),
            verdict_label(classify_score(score))
        )?;
    }

    let rating = PerformanceRating::from_score(m.performance);
    heading(out, "Performance Analysis")?;
    writeln!(out, "  {} ({}/100)", rating.label().bold(), m.performance)?;
    writeln!(out, "  {}", rating.advice())?;

    heading(out, "Core Web Vitals")?;
    for metric in TimedMetric::iter().filter(TimedMetric::is_core_web_vital) {
        write_timed(out, metric, m)?;
    }

    write_performance_metrics(out, m)?;
    write_page_statistics(out, m)?;

    if !m.third_party.is_empty() {
        heading(out, "Third-Party Impact")?;
        for tp in m.third_party.iter().take(REPORT_TOP_N) {
            writeln!(
                out,
                "  {:<LABEL_WIDTH$}{:>9}  {}",
                tp.entity,
                format_time(tp.main_thread_time),
                format_bytes(tp.transfer_size)
            )?;
        }
    }

    if !result.opportunities.is_empty() {
        heading(out, "Improvement Opportunities")?;
        for opp in result.opportunities.iter().take(REPORT_TOP_N) {
            writeln!(
                out,
                "  {} {}",
                format!("Save {:<8}", format_time(opp.savings)).cyan(),
                opp.title
            )?;
        }
    }

    if !result.recommendations.is_empty() {
        heading(out, "Quick Recommendations")?;
        for rec in &result.recommendations {
            writeln!(out, "  • {}: {}", rec.title().bold(), rec.detail())?;
        }
    }

    if let Some(seo) = &m.seo_details {
        write_seo_checklist(out, seo)?;
    }
    Ok(())
}

fn write_performance_metrics<W: Write>(out: &mut W, m: &NormalizedMetrics) -> io::Result<()> {
    heading(out, "Performance Metrics")?;
    for metric in TimedMetric::iter().filter(|metric| !metric.is_core_web_vital()) {
        write_timed(out, metric, m)?;
    }
    Ok(())
}

fn write_page_statistics<W: Write>(out: &mut W, m: &NormalizedMetrics) -> io::Result<()> {
    heading(out, "Page Statistics")?;
    for (label, value) in [
        ("Total Size", format_bytes(m.total_size)),
        ("DOM Elements", m.dom_size.to_string()),
        ("Requests", m.request_count.to_string()),
        ("JS Time", format_time(m.js_time)),
        ("Unused CSS", format_bytes(m.unused_css)),
        ("Unused JS", format_bytes(m.unused_js)),
        ("Image Savings", format_bytes(m.image_size)),
        ("Render Blocking", m.render_blocking.to_string()),
    ] {
        writeln!(out, "  {:<LABEL_WIDTH$}{:>9}", label, value)?;
    }
    Ok(())
}

fn write_seo_checklist<W: Write>(out: &mut W, seo: &SeoDetails) -> io::Result<()> {
    heading(out, "SEO Checklist")?;
    let checks: [(&str, &SeoCheck); 7] = [
        ("Document title", &seo.document_title),
        ("Meta description", &seo.meta_description),
        ("Viewport", &seo.viewport),
        ("robots.txt", &seo.robots_txt),
        ("Canonical link", &seo.canonical),
        ("hreflang", &seo.hreflang),
        ("Structured data", &seo.structured_data),
    ];
    for (label, check) in checks {
        writeln!(out, "  {} {}", check_mark(check.score), label)?;
    }
    let element_checks: [(&str, &SeoElementCheck, &str); 2] = [
        ("Image alt text", &seo.image_alt, "images missing alt text"),
        ("Link text", &seo.link_text, "links without descriptive text"),
    ];
    for (label, check, missing) in element_checks {
        if check.missing > 0 {
            writeln!(
                out,
                "  {} {} ({} {})",
                check_mark(check.score),
                label,
                check.missing,
                missing
            )?;
        } else {
            writeln!(out, "  {} {}", check_mark(check.score), label)?;
        }
    }
    Ok(())
}

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title.bold().underline())
}

fn write_timed<W: Write>(out: &mut W, metric: TimedMetric, m: &NormalizedMetrics) -> io::Result<()> {
    let value = metric.value(m);
    let shown = match metric {
        TimedMetric::CumulativeLayoutShift => format!("{value:.3}"),
        _ => format_time(value),
    };
    writeln!(
        out,
        "  {:<LABEL_WIDTH$}{:>9}  {}  {}",
        metric.label(),
        shown,
        verdict_label(metric.classify(value)),
        metric.note().dimmed()
    )
}

fn verdict_label(verdict: Verdict) -> ColoredString {
    // Pad before coloring so escape codes don't break alignment
    let padded = format!("{:<17}", verdict.to_string());
    match verdict {
        Verdict::Good => padded.green(),
        Verdict::NeedsImprovement => padded.yellow(),
        Verdict::Poor => padded.red(),
    }
}

fn check_mark(score: Option<f64>) -> ColoredString {
    match score {
        Some(s) if s >= 0.9 => "✓".green(),
        Some(_) => "✗".red(),
        None => "-".dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Strategy;
    use crate::extract::{Opportunity, ThirdPartyEntity};
    use crate::recommend::Recommendation;

    fn render(result: &AuditResult) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        write_report(&mut buf, result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> AuditResult {
        AuditResult {
            url: "https://example.com/".to_string(),
            strategy: Strategy::Mobile,
            timestamp_ms: 1_700_000_000_000,
            metrics: NormalizedMetrics {
                performance: 42,
                accessibility: 91,
                lcp: 2710.0,
                cls: 0.02,
                tbt: 650.0,
                fcp: 1500.0,
                total_size: 1_843_211.0,
                dom_size: 812,
                ..Default::default()
            },
            opportunities: (0..7)
                .map(|i| Opportunity {
                    title: format!("Opportunity {i}"),
                    description: String::new(),
                    savings: 2000.0 - f64::from(i) * 100.0,
                })
                .collect(),
            recommendations: vec![
                Recommendation::OptimizeLcp,
                Recommendation::ReduceBlockingTime,
            ],
        }
    }

    #[test]
    fn test_report_sections() {
        let text = render(&sample());
        assert!(text.contains("Results for https://example.com/ (mobile)"));
        assert!(text.contains("Overall Scores"));
        assert!(text.contains("42/100"));
        assert!(text.contains("Poor Performance (42/100)"));
        assert!(text.contains("Largest Contentful Paint (LCP)"));
        assert!(text.contains("2.7 s"));
        assert!(text.contains("Needs improvement"));
        assert!(text.contains("1.8 MB"));
        assert!(text.contains("812"));
        assert!(text.contains("• Optimize LCP: Consider lazy loading"));
        // No third-party data, no SEO details
        assert!(!text.contains("Third-Party Impact"));
        assert!(!text.contains("SEO Checklist"));
    }

    #[test]
    fn test_opportunities_truncated_to_top_five() {
        let text = render(&sample());
        assert!(text.contains("Opportunity 0"));
        assert!(text.contains("Opportunity 4"));
        assert!(!text.contains("Opportunity 5"));
    }

    #[test]
    fn test_fmp_falls_back_to_fcp() {
        let text = render(&sample());
        let fmp_line = text
            .lines()
            .find(|l| l.contains("First Meaningful Paint"))
            .unwrap();
        assert!(fmp_line.contains("1.5 s"));
    }

    #[test]
    fn test_every_timed_metric_reported_once() {
        let text = render(&sample());
        for metric in TimedMetric::iter() {
            assert_eq!(text.matches(metric.label()).count(), 1, "{metric:?}");
        }
        let vitals = text.find("Core Web Vitals").unwrap();
        let others = text.find("Performance Metrics").unwrap();
        let cls = text.find("Cumulative Layout Shift (CLS)").unwrap();
        let ttfb = text.find("Time to First Byte").unwrap();
        assert!(vitals < cls && cls < others && others < ttfb);
        assert!(text.contains("0.020"));
    }

    #[test]
    fn test_third_party_and_seo_sections() {
        let mut result = sample();
        result.metrics.third_party = vec![ThirdPartyEntity {
            entity: "Google Tag Manager".to_string(),
            main_thread_time: 212.0,
            transfer_size: 98_000.0,
        }];
        result.metrics.seo_details = Some(SeoDetails {
            document_title: SeoCheck {
                score: Some(1.0),
                description: String::new(),
            },
            image_alt: SeoElementCheck {
                score: Some(0.0),
                missing: 3,
                description: String::new(),
            },
            ..Default::default()
        });
        let text = render(&result);
        assert!(text.contains("Third-Party Impact"));
        assert!(text.contains("Google Tag Manager"));
        assert!(text.contains("95.7 KB"));
        assert!(text.contains("✓ Document title"));
        assert!(text.contains("✗ Image alt text (3 images missing alt text)"));
        assert!(text.contains("- Viewport"));
    }
}
