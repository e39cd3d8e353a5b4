//! Small helpers shared by the scraping pipeline and the CLI.

/// Truncate a string for logging purposes.
///
/// Strings longer than `max` characters are cut at a character boundary and
/// suffixed with `"…(+N bytes)"`, where N counts the dropped bytes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Resolve the headline cap for a run.
///
/// A missing or non-positive override falls back to the rule's own cap.
pub fn effective_max_items(rule_max: usize, requested: Option<i64>) -> usize {
    match requested.map(usize::try_from) {
        Some(Ok(n)) if n > 0 => n,
        _ => rule_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let s = "ééé";
        assert_eq!(truncate_for_log(s, 1), "é…(+4 bytes)");
    }

    #[test]
    fn test_effective_max_items() {
        assert_eq!(effective_max_items(10, None), 10);
        assert_eq!(effective_max_items(10, Some(0)), 10);
        assert_eq!(effective_max_items(10, Some(3)), 3);
        assert_eq!(effective_max_items(10, Some(25)), 25);
    }

    #[test]
    fn test_effective_max_items_negative_override() {
        assert_eq!(effective_max_items(10, Some(-3)), 10);
        assert_eq!(effective_max_items(7, Some(i64::MIN)), 7);
    }
}
