//! Small pure text helpers.

use unicode_segmentation::UnicodeSegmentation;

/// Truncate a string to fit within `max_total` graphemes, appending `suffix` if truncated.
///
/// The suffix counts toward the budget: the returned string is at most `max_total` graphemes.
#[must_use]
pub fn truncate_to_fit(raw: &str, max_total: usize, suffix: &str) -> String {
    if raw.graphemes(true).count() <= max_total {
        return raw.to_string();
    }
    let take = max_total.saturating_sub(suffix.graphemes(true).count());
    let head: String = raw.graphemes(true).take(take).collect();
    format!("{head}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::truncate_to_fit;

    #[test]
    fn to_fit_respects_budget() {
        let result = truncate_to_fit("someone@example.com", 8, "…");
        assert_eq!(result, "someone…");
    }

    #[test]
    fn to_fit_short_unchanged() {
        assert_eq!(truncate_to_fit("a@b.c", 10, "…"), "a@b.c");
    }

    #[test]
    fn to_fit_exact_length_unchanged() {
        assert_eq!(truncate_to_fit("hello", 5, "…"), "hello");
    }
}
