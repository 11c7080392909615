//! Text formatting helpers shared by the core view-models and the front end.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format an integer with thousands separators ("450,012").
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Truncate text to fit within a display width, appending "..." when cut.
///
/// Width-aware so CJK characters (width 2) do not overflow the column.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "...";
    if max_width <= ELLIPSIS.len() {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ELLIPSIS.len();
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

/// Pad text with trailing spaces to the given display width.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - text_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(48), "48");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(3200), "3,200");
        assert_eq!(group_thousands(15420), "15,420");
        assert_eq!(group_thousands(450012), "450,012");
        assert_eq!(group_thousands(1_000_000_000), "1,000,000,000");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("customers", 20), "customers");
        assert_eq!(truncate_to_width("report_monthly_sales", 10), "report_...");
        assert_eq!(truncate_to_width("", 5), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each character is 2 columns wide; only two fit beside the ellipsis.
        assert_eq!(truncate_to_width("データベース", 8), "デー...");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("id", 4), "id  ");
        assert_eq!(pad_to_width("status", 3), "status");
    }
}
