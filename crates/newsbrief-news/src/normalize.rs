//! Turns a raw feed description into a readable summary.

use crate::types::NO_SUMMARY;

/// Strip markup tags and decode HTML entities.
///
/// Each tag boundary becomes a space and runs of whitespace collapse to one,
/// so text split by inline tags (`<b>Apple</b>News`) stays word-separated.
/// A `<` opens a tag only when followed by `/`, `!` or a letter; otherwise it
/// is kept as text (`revenue < forecast`).
#[must_use]
pub fn strip_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut chars = html.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '<' if !in_tag && chars.peek().is_some_and(|&c| opens_tag(c)) => {
                in_tag = true;
                out.push(' ');
            }
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    let decoded = html_escape::decode_html_entities(&out);
    collapse_whitespace(&decoded)
}

/// Build the summary for one feed item.
///
/// Markup is stripped first, then the title is removed from the text. When
/// nothing is left, or what is left is just the title again, the
/// [`NO_SUMMARY`] sentinel is returned.
#[must_use]
pub fn normalize_summary(title: &str, raw_description: &str) -> String {
    let stripped = strip_markup(raw_description);
    let title = collapse_whitespace(title);
    let title = title.as_str();

    let remainder = if title.is_empty() {
        stripped
    } else {
        collapse_whitespace(&stripped.replace(title, ""))
    };

    if remainder.is_empty() || remainder.to_lowercase() == title.to_lowercase() {
        return NO_SUMMARY.to_string();
    }
    remainder
}

fn opens_tag(next: char) -> bool {
    next == '/' || next == '!' || next.is_ascii_alphabetic()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_title_and_markup() {
        assert_eq!(
            normalize_summary("Apple News", "<p>Apple News update here</p>"),
            "update here"
        );
    }

    #[test]
    fn description_equal_to_title_yields_sentinel() {
        assert_eq!(
            normalize_summary("Apple News", "<a href=\"x\">Apple News</a>"),
            NO_SUMMARY
        );
    }

    #[test]
    fn case_insensitive_title_match_yields_sentinel() {
        // Title substring removal is case-sensitive, so the text survives step 2
        // and is caught by the case-insensitive comparison.
        assert_eq!(
            normalize_summary("Apple News", "<b>APPLE NEWS</b>"),
            NO_SUMMARY
        );
    }

    #[test]
    fn empty_description_yields_sentinel() {
        assert_eq!(normalize_summary("Apple News", ""), NO_SUMMARY);
        assert_eq!(normalize_summary("Apple News", "<p> </p>"), NO_SUMMARY);
    }

    #[test]
    fn title_split_by_tags_is_still_removed() {
        assert_eq!(
            normalize_summary("Apple News", "<b>Apple</b> News <i>rises today</i>"),
            "rises today"
        );
    }

    #[test]
    fn google_news_style_description() {
        let raw = "<a href=\"https://news.google.com/x\" target=\"_blank\">Tesla recalls cars</a>\
                   &nbsp;&nbsp;<font color=\"#6f6f6f\">Reuters</font>";
        assert_eq!(normalize_summary("Tesla recalls cars", raw), "Reuters");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            strip_markup("<p>Profits &amp; losses&nbsp;rise</p>"),
            "Profits & losses rise"
        );
    }

    #[test]
    fn inline_tags_keep_words_apart() {
        assert_eq!(strip_markup("<b>Apple</b>News"), "Apple News");
    }

    #[test]
    fn unrelated_text_is_kept_trimmed() {
        assert_eq!(
            normalize_summary("Title", "  <div>Something else entirely</div>  "),
            "Something else entirely"
        );
    }

    #[test]
    fn bare_less_than_is_text() {
        assert_eq!(
            normalize_summary("T", "Revenue < forecast, shares fell sharply"),
            "Revenue < forecast, shares fell sharply"
        );
        assert_eq!(strip_markup("a < b and c<3"), "a < b and c<3");
        assert_eq!(strip_markup("a &lt; b"), "a < b");
    }

    #[test]
    fn comments_and_closing_tags_are_still_stripped() {
        assert_eq!(strip_markup("<!-- note -->Shares <b>rose</b>"), "Shares rose");
    }

    #[test]
    fn title_with_repeated_spaces_is_removed() {
        assert_eq!(
            normalize_summary("Apple  News", "<p>Apple  News update here</p>"),
            "update here"
        );
        assert_eq!(normalize_summary(" Apple\tNews ", "Apple News"), NO_SUMMARY);
    }

    #[test]
    fn non_breaking_space_separates_words() {
        assert_eq!(
            normalize_summary("Acme", "Acme profits soared\u{a0}today"),
            "profits soared today"
        );
    }
}
