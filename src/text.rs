//! Text normalization for building search queries over record fields.
//!
//! Location fields arrive padded with filler spaces and street numbers,
//! and user queries arrive in whatever case and spacing the user typed.
//! Both sides get pushed through the same normalization so substring
//! matching compares like with like.

/// Collapses every maximal run of whitespace into a single ASCII space.
///
/// Boundary whitespace is collapsed, not removed; trimming is
/// [`normalize_query`]'s job.
pub fn collapse_whitespace(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut in_space = false;
    for c in input.chars() {
        if c.is_whitespace() {
            if !in_space {
                result.push(' ');
                in_space = true;
            }
        } else {
            result.push(c);
            in_space = false;
        }
    }
    result
}

/// Drops a leading all-digit token (a street number) and the space after
/// it. A lone number with nothing following it is left alone, since
/// stripping it would empty the query.
pub fn strip_leading_number(input: &str) -> &str {
    match input.split_once(' ') {
        Some((first, rest)) if !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()) => {
            rest
        }
        _ => input,
    }
}

/// Builds a comparable query: whitespace collapsed, trimmed, leading
/// street number stripped, case folded to lowercase.
pub fn normalize_query(input: &str) -> String {
    let collapsed = collapse_whitespace(input);
    strip_leading_number(collapsed.trim()).to_lowercase()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::{collapse_whitespace, normalize_query, strip_leading_number};

    #[test]
    fn test_collapse_squeezes_runs_to_single_spaces() {
        assert_eq!(collapse_whitespace("700  W  7TH\t\tST"), "700 W 7TH ST");
    }

    #[test]
    fn test_collapse_keeps_boundary_spaces() {
        assert_eq!(collapse_whitespace("  edge  "), " edge ");
    }

    #[test]
    fn test_strip_drops_street_numbers_only() {
        assert_eq!(strip_leading_number("1900 W TEMPLE ST"), "W TEMPLE ST");
        assert_eq!(strip_leading_number("W TEMPLE ST"), "W TEMPLE ST");
        assert_eq!(strip_leading_number("1900"), "1900");
    }

    #[test]
    fn test_normalize_builds_comparable_queries() {
        assert_eq!(normalize_query("  1900   W  Temple St "), "w temple st");
    }

    #[proptest(fork = false)]
    fn test_collapse_is_idempotent(input: String) {
        let once = collapse_whitespace(&input);
        let twice = collapse_whitespace(&once);
        prop_assert_eq!(twice, once);
    }

    #[proptest(fork = false)]
    fn test_collapse_never_leaves_adjacent_whitespace(input: String) {
        let collapsed = collapse_whitespace(&input);
        prop_assert!(!collapsed.contains("  "));
        prop_assert!(collapsed.chars().all(|c| c == ' ' || !c.is_whitespace()));
    }

    #[proptest(fork = false)]
    fn test_normalized_queries_are_trimmed_and_lowercase(
        #[strategy("[A-Za-z0-9 \\t]{0,40}")] input: String,
    ) {
        let query = normalize_query(&input);
        prop_assert!(!query.starts_with(' ') && !query.ends_with(' '));
        prop_assert!(!query.chars().any(|c| c.is_uppercase()));
    }
}
