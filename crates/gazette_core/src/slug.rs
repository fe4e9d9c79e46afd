//! Slug derivation from post titles.

/// Derive a URL-safe slug from a title.
///
/// Lowercases the input, converts whitespace runs to single hyphens, and
/// drops every character outside `[a-z0-9-]`. Hyphen runs collapse and
/// leading/trailing hyphens are trimmed, so the result is stable under
/// re-application.
///
/// # Examples
///
/// ```
/// use gazette_core::slugify;
///
/// assert_eq!(slugify("Spring Planting: A Guide!"), "spring-planting-a-guide");
/// assert_eq!(slugify("spring-planting-a-guide"), "spring-planting-a-guide");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            if !slug.is_empty() {
                pending_hyphen = true;
            }
            continue;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(ch);
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(slugify("What's New in 2023?"), "whats-new-in-2023");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(slugify("a   b\t\nc"), "a-b-c");
    }

    #[test]
    fn idempotent() {
        for title in [
            "Hello World",
            "What's New in 2023?",
            "a - b",
            "  padded  ",
            "\"Quoted Title\"",
        ] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", title);
        }
    }

    #[test]
    fn output_alphabet() {
        let slug = slugify("Mixed_Case & Symbols #42!");
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        );
    }

    #[test]
    fn no_leading_or_trailing_hyphens() {
        assert_eq!(slugify(" - wrapped - "), "wrapped");
    }
}
