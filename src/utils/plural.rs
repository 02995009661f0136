//! Pluralization for log lines.

#[inline]
fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "record")` -> `"0 records"`
/// - `plural_count(1, "record")` -> `"1 record"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "provider"), "0 providers");
        assert_eq!(plural_count(1, "provider"), "1 provider");
        assert_eq!(plural_count(12, "provider"), "12 providers");
    }
}
