// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Human-readable byte sizes.

const UNITS: [&str; 7] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB"];
const STEP: u64 = 1024;

/// Format a byte count using base-1024 units and at most two decimals.
///
/// Trailing zeros are dropped, so whole magnitudes print without a fraction.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_bytes(0), "0 Bytes");
/// assert_eq!(format_bytes(1536), "1.5 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit < UNITS.len() - 1 && bytes / scale >= STEP {
        scale *= STEP;
        unit += 1;
    }

    let value = bytes as f64 / scale as f64;
    // Half away from zero, then `Display` drops redundant zeros.
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[unit])
}
