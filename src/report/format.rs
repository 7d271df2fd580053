//! Human-readable units.

/// Formats milliseconds: `"850 ms"` below one second, `"2.4 s"` above.
pub fn format_time(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{} ms", ms.round())
    } else {
        format!("{:.1} s", ms / 1000.0)
    }
}

/// Formats a byte count with binary units (`B`, `KB`, `MB`).
pub fn format_bytes(bytes: f64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    if bytes <= 0.0 || !bytes.is_finite() {
        "0 B".to_string()
    } else if bytes < KIB {
        format!("{} B", bytes.round())
    } else if bytes < MIB {
        format!("{:.1} KB", bytes / KIB)
    } else {
        format!("{:.1} MB", bytes / MIB)
    }
}
