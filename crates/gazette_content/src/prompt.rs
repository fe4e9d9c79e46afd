//! The weekly article prompt.

use chrono::{Datelike, Utc};

/// Token budget for the article completion.
pub const MAX_TOKENS: u32 = 800;

/// Sampling temperature for the article completion.
pub const TEMPERATURE: f32 = 0.85;

/// Build the article prompt for a given ISO week and year.
///
/// The format instruction drives the marker parsing in [`crate::parse_response`]:
/// the model is asked to label each field with a literal marker.
///
/// # Examples
///
/// ```
/// use gazette_content::weekly_prompt;
///
/// let prompt = weekly_prompt(34, 2026);
/// assert!(prompt.contains("week 34 of 2026"));
/// assert!(prompt.contains("\"Keyword:\""));
/// ```
pub fn weekly_prompt(week: u32, year: i32) -> String {
    format!(
        "Generate a keyword, hashtag, title and 400 word article about a trending topic \
         in week {} of {} in the following format: \"Keyword:\" \"Hashtag:\" \"Title:\" \"Article:\"",
        week, year
    )
}

/// Build the article prompt for the current ISO week.
pub fn weekly_prompt_for_now() -> String {
    let today = Utc::now();
    let iso = today.iso_week();
    weekly_prompt(iso.week(), iso.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_all_markers() {
        let prompt = weekly_prompt(1, 2026);
        for marker in ["\"Keyword:\"", "\"Hashtag:\"", "\"Title:\"", "\"Article:\""] {
            assert!(prompt.contains(marker), "missing {}", marker);
        }
    }

    #[test]
    fn prompt_for_now_embeds_current_week() {
        let prompt = weekly_prompt_for_now();
        assert!(prompt.contains("week "));
    }
}
