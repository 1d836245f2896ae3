//! Shared helper functions for CLI output
//!
//! Formatting used by both the message renderers and the summary table.

/// Format a weight in kg the way the company's reports always have:
/// whole numbers keep one decimal place ("5000.0"), others print as-is.
pub fn format_kg(kg: f64) -> String {
    if kg.is_finite() && kg.fract() == 0.0 {
        format!("{:.1}", kg)
    } else {
        format!("{}", kg)
    }
}

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kg() {
        assert_eq!(format_kg(5000.0), "5000.0");
        assert_eq!(format_kg(0.0), "0.0");
        assert_eq!(format_kg(7.0), "7.0");
        assert_eq!(format_kg(12.5), "12.5");
        assert_eq!(format_kg(-3.0), "-3.0");
        assert_eq!(format_kg(f64::NAN), "NaN");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
        assert_eq!(truncate_str("Вантажівка", 7), "Вант...");
    }
}
