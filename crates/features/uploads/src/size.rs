const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
const STEP: u64 = 1024;

/// Renders a byte count with a binary (1024-based) unit.
///
/// The value is rounded to two decimals with trailing zeros removed. Sizes beyond the
/// largest unit stay in `TB` rather than overflowing the unit table.
///
/// ```rust
/// use nestly_uploads::format_size;
///
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1024), "1 KB");
/// assert_eq!(format_size(5 * 1024 * 1024), "5 MB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let mut index = 0;
    let mut divisor = 1_u64;
    while index + 1 < UNITS.len() && bytes / divisor >= STEP {
        divisor *= STEP;
        index += 1;
    }

    let value = (bytes as f64 / divisor as f64 * 100.0).round() / 100.0;
    // f64's Display prints the shortest form, so 1.50 becomes "1.5" and 1.00 becomes "1".
    format!("{value} {}", UNITS[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_largest_whole_unit() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1 MB");
        assert_eq!(format_size(1_073_741_824), "1 GB");
        assert_eq!(format_size(1_099_511_627_776), "1 TB");
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 1234 / 1024 = 1.205078...
        assert_eq!(format_size(1234), "1.21 KB");
        // 10.333... MB
        assert_eq!(format_size(10_835_000), "10.33 MB");
    }

    #[test]
    fn clamps_to_terabytes() {
        let petabyte = 1024_u64.pow(5);
        assert_eq!(format_size(petabyte), "1024 TB");
        assert!(format_size(u64::MAX).ends_with(" TB"));
    }
}
