//! JSON bundle output.
//!
//! The bundle is an array with one object per audited profile, in the shape
//! a history store would persist: `url`, `strategy`, `ts`, `metrics`,
//! `opportunities` and `recommendations`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::cache::ResultCache;

/// Writes the bundle as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, cache: &ResultCache) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, cache).context("Failed to serialize results")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Writes the bundle to `path`, replacing any existing file.
pub fn save_json(path: &Path, cache: &ResultCache) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_json(&mut writer, cache)
        .with_context(|| format!("Failed to write results to {}", path.display()))?;
    log::info!("Saved {} result(s) to {}", cache.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::PageSpeedResponse;
    use crate::cache::AuditResult;
    use crate::config::Strategy;
    use serde_json::{json, Value};

    fn cache() -> ResultCache {
        let raw: PageSpeedResponse = serde_json::from_value(json!({
            "lighthouseResult": {
                "categories": {"performance": {"score": 0.42}},
                "audits": {
                    "unused-css-rules": {"details": {"overallSavingsBytes": 60000}}
                }
            }
        }))
        .unwrap();
        let mut cache = ResultCache::new();
        cache.insert(AuditResult::from_response(
            "https://example.com/",
            Strategy::Mobile,
            &raw,
        ));
        cache
    }

    #[test]
    fn test_write_json_shape() {
        let mut buf = Vec::new();
        write_json(&mut buf, &cache()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));

        let value: Value = serde_json::from_str(&text).unwrap();
        let entry = &value[0];
        assert_eq!(entry["url"], "https://example.com/");
        assert_eq!(entry["strategy"], "mobile");
        assert_eq!(entry["metrics"]["performance"], 42);
        assert_eq!(entry["metrics"]["unusedCSS"], 60000.0);
        assert_eq!(
            entry["recommendations"][0],
            "Remove unused CSS: Use tools like PurgeCSS to eliminate dead code"
        );
    }

    #[test]
    fn test_save_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        save_json(&path, &cache()).unwrap();

        let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_save_json_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("results.json");
        let err = save_json(&path, &cache()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to create output file"));
    }
}
