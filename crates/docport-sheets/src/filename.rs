//! Sheet-name sanitization for output filenames.

/// Replace characters that are unsafe in filenames with `_`.
///
/// Covers `<>:"/\|?*` and ASCII control characters. A name that sanitizes
/// down to nothing becomes `sheet`.
pub(crate) fn safe_sheet_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|ch| match ch {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            ch if (ch as u32) < 0x20 => '_',
            ch => ch,
        })
        .collect();

    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        "sheet".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_names_pass_through() {
        assert_eq!(safe_sheet_filename("Summary"), "Summary");
        assert_eq!(safe_sheet_filename("成本核算"), "成本核算");
    }

    #[test]
    fn test_separators_are_replaced() {
        assert_eq!(safe_sheet_filename("Q1/2024"), "Q1_2024");
        assert_eq!(safe_sheet_filename(r"a\b:c*d?"), "a_b_c_d_");
    }

    #[test]
    fn test_control_characters_are_replaced() {
        assert_eq!(safe_sheet_filename("a\u{1}b"), "a_b");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(safe_sheet_filename("  data  "), "data");
    }

    #[test]
    fn test_empty_result_falls_back() {
        assert_eq!(safe_sheet_filename(""), "sheet");
        assert_eq!(safe_sheet_filename("   "), "sheet");
    }
}
