//! Marker-based parsing of the generated article text.
//!
//! The completion response is free text labeled with literal markers
//! (`Keyword:`, `Hashtag:`, `Title:`, `Article:`). Each field has an
//! explicit fallback for the marker-absent case, so parsing never fails
//! structurally; a missing `Title:` marker yields a degenerate empty title.

use gazette_core::{PostDraft, slugify};
use gazette_error::{ContentError, ContentErrorKind, ContentResult};
use regex::Regex;
use tracing::debug;

const KEYWORD_MARKER: &str = "Keyword:";
const HASHTAG_MARKER: &str = "Hashtag:";
const TITLE_MARKER: &str = "Title:";
// The body fallback scans for the marker with its trailing space, which is
// why it differs from TITLE_MARKER.
const TITLE_BODY_MARKER: &str = "Title: ";
const ARTICLE_MARKER: &str = "Article:";

/// Parse the raw completion text into a fully populated draft.
///
/// `site_url` is prepended to the derived slug to form the post URL.
///
/// # Errors
///
/// Returns an error only if draft assembly fails; every parsing branch has
/// a structural fallback.
pub fn parse_response(text: &str, site_url: &str) -> ContentResult<PostDraft> {
    let keyword = extract_keyword(text);
    let hashtag = extract_hashtag(text);
    let title = extract_title(text);
    let slug = slugify(&title);
    let url = format!("{}{}", site_url, slug);
    let body = extract_body(text);
    let intro = extract_intro(&body, &title);

    debug!(
        keyword = %keyword,
        title = %title,
        slug = %slug,
        body_len = body.len(),
        "Parsed completion response"
    );

    PostDraft::builder()
        .keyword(keyword)
        .hashtag(hashtag)
        .title(title)
        .slug(slug)
        .url(url)
        .intro(intro)
        .body(body)
        .build()
        .map_err(|e| ContentError::new(ContentErrorKind::Builder(e.to_string())))
}

/// Text after `Keyword:` up to the next line break; without the marker,
/// the first whitespace-delimited token of the whole response.
fn extract_keyword(text: &str) -> String {
    match text.find(KEYWORD_MARKER) {
        Some(idx) => {
            let after = &text[idx + KEYWORD_MARKER.len()..];
            let end = after.find('\n').unwrap_or(after.len());
            after[..end].trim().to_string()
        }
        None => text.split_whitespace().next().unwrap_or("").to_string(),
    }
}

/// Text between `Hashtag:` and `Title:` (non-greedy, across line breaks);
/// malformed markers yield the empty string. Without the marker, every
/// `#word` token in the response, joined by single spaces.
fn extract_hashtag(text: &str) -> String {
    if text.contains(HASHTAG_MARKER) {
        let between = Regex::new(r"(?s)Hashtag:(.*?)Title:").expect("Valid hashtag regex");
        match between.captures(text) {
            Some(caps) => caps[1].trim().to_string(),
            None => String::new(),
        }
    } else {
        let token = Regex::new(r"#\w+").expect("Valid hashtag token regex");
        token
            .find_iter(text)
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Text after `Title:` up to the next line break, trimmed, with quote
/// characters stripped. No fallback: a missing marker yields an empty title.
fn extract_title(text: &str) -> String {
    match text.find(TITLE_MARKER) {
        Some(idx) => {
            let after = &text[idx + TITLE_MARKER.len()..];
            let end = after.find('\n').unwrap_or(after.len());
            after[..end].trim().replace('"', "")
        }
        None => String::new(),
    }
}

/// Everything after `Article:`, trimmed; without that marker, everything
/// after the first `"Title: "` occurrence; with neither, empty.
fn extract_body(text: &str) -> String {
    if let Some(idx) = text.find(ARTICLE_MARKER) {
        return text[idx + ARTICLE_MARKER.len()..].trim().to_string();
    }
    match text.find(TITLE_BODY_MARKER) {
        Some(idx) => text[idx + TITLE_BODY_MARKER.len()..].trim().to_string(),
        None => String::new(),
    }
}

/// The paragraph immediately following the first body paragraph that
/// contains the title verbatim; empty when no paragraph matches or the
/// match is the final paragraph.
fn extract_intro(body: &str, title: &str) -> String {
    let paragraphs: Vec<&str> = body.split("\n\n").collect();
    paragraphs
        .iter()
        .position(|paragraph| paragraph.contains(title))
        .and_then(|idx| paragraphs.get(idx + 1))
        .map(|paragraph| paragraph.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://example.com/";

    const FULL_RESPONSE: &str = "Keyword: gardening\n\
Hashtag: #gardening #spring\n\
Title: \"Spring Planting Season\"\n\
Article:\n\
Spring Planting Season\n\n\
Gardeners everywhere are preparing their beds.\n\n\
Seed selection matters more than most expect.";

    #[test]
    fn keyword_from_marker() {
        assert_eq!(extract_keyword(FULL_RESPONSE), "gardening");
    }

    #[test]
    fn keyword_without_trailing_newline_takes_rest() {
        assert_eq!(extract_keyword("Keyword: solo"), "solo");
    }

    #[test]
    fn keyword_fallback_first_token() {
        assert_eq!(extract_keyword("  compost heaps are great"), "compost");
    }

    #[test]
    fn hashtag_between_markers() {
        assert_eq!(extract_hashtag(FULL_RESPONSE), "#gardening #spring");
    }

    #[test]
    fn hashtag_spans_line_breaks() {
        let text = "Hashtag:\n#one\n#two\nTitle: X\n";
        assert_eq!(extract_hashtag(text), "#one\n#two");
    }

    #[test]
    fn hashtag_malformed_markers_yield_empty() {
        // Marker present but no following Title: marker.
        assert_eq!(extract_hashtag("Hashtag: #lonely"), "");
    }

    #[test]
    fn hashtag_fallback_scans_tokens() {
        let text = "no markers here, just #one tag and #another tag";
        assert_eq!(extract_hashtag(text), "#one #another");
    }

    #[test]
    fn hashtag_fallback_empty_when_no_tokens() {
        assert_eq!(extract_hashtag("plain text"), "");
    }

    #[test]
    fn title_strips_quotes() {
        assert_eq!(extract_title(FULL_RESPONSE), "Spring Planting Season");
    }

    #[test]
    fn title_missing_marker_is_empty() {
        assert_eq!(extract_title("no markers at all"), "");
    }

    #[test]
    fn body_after_article_marker() {
        let body = extract_body(FULL_RESPONSE);
        assert!(body.starts_with("Spring Planting Season"));
        assert!(body.ends_with("most expect."));
    }

    #[test]
    fn body_fallback_after_title_with_space() {
        let text = "Title: The Headline\nFirst paragraph.";
        assert_eq!(extract_body(text), "The Headline\nFirst paragraph.");
    }

    #[test]
    fn body_empty_without_markers() {
        assert_eq!(extract_body("free text without labels"), "");
    }

    #[test]
    fn intro_is_paragraph_after_title_match() {
        let body = "Title X\n\nIntro paragraph.\n\nBody paragraph.";
        assert_eq!(extract_intro(body, "Title X"), "Intro paragraph.");
    }

    #[test]
    fn intro_empty_when_no_paragraph_matches() {
        let body = "First.\n\nSecond.";
        assert_eq!(extract_intro(body, "Absent Title"), "");
    }

    #[test]
    fn intro_empty_when_match_is_last_paragraph() {
        let body = "Lead-in.\n\nTitle X closes the piece.";
        assert_eq!(extract_intro(body, "Title X"), "");
    }

    #[test]
    fn parse_response_populates_all_fields() {
        let draft = parse_response(FULL_RESPONSE, SITE).unwrap();
        assert_eq!(draft.keyword(), "gardening");
        assert_eq!(draft.hashtag(), "#gardening #spring");
        assert_eq!(draft.title(), "Spring Planting Season");
        assert_eq!(draft.slug(), "spring-planting-season");
        assert_eq!(draft.url(), "https://example.com/spring-planting-season");
        assert_eq!(
            draft.intro(),
            "Gardeners everywhere are preparing their beds."
        );
        assert!(draft.body().contains("Seed selection"));
    }

    #[test]
    fn parse_response_survives_markerless_text() {
        let draft = parse_response("rambling text with no structure", SITE).unwrap();
        assert_eq!(draft.keyword(), "rambling");
        assert_eq!(draft.title(), "");
        assert_eq!(draft.slug(), "");
        assert_eq!(draft.body(), "");
    }
}
