//! Size formatting utilities — human-readable byte counts.
//!
//! All internal sizes are `u64` bytes. Floating point is only used
//! at the display-formatting boundary.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with one decimal place and the largest unit that keeps
/// the value below 1024 (binary steps, short labels).
///
/// Anything past the terabyte range is shown in PB.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{value:.1} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.1} PB")
}

/// Format a fractional byte count, e.g. an average size.
pub fn format_size_f64(bytes: f64) -> String {
    format_size(bytes.max(0.0) as u64)
}

/// Format a count with comma thousands separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let head = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    out.push_str(&digits[..head]);
    for (i, group) in digits.as_bytes()[head..].chunks(3).enumerate() {
        if head > 0 || i > 0 {
            out.push(',');
        }
        // Digits are ASCII, so every 3-byte chunk is valid UTF-8.
        out.extend(group.iter().map(|&b| b as char));
    }
    out
}

/// `"1 file"` / `"3 files"`.
pub fn pluralise(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
