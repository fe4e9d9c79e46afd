//! Report email composition.

use gazette_core::RunReport;

/// Subject line for the report email.
pub fn compose_subject(site_name: &str, report: &RunReport) -> String {
    format!("{} - {}", site_name, report.draft().title())
}

/// HTML body for the report email.
///
/// Crosspost successes are comma-joined on one line; failures are broken
/// onto their own lines, with a microblog failure appended last.
pub fn compose_body(site_name: &str, admin_user: &str, report: &RunReport) -> String {
    let draft = report.draft();
    format!(
        "Good day, {admin},</br></br>\
         A new {site} article was successfully posted to the site.</br></br>\
         Keyword: {keyword}</br>\
         Hashtag: {hashtag}</br>\
         Title: {title}</br>\
         Slug: {slug}</br>\
         Post URL: {url}</br></br>\
         Posted: {posted}</br></br>\
         Failed: </br>{failed}</br></br>\
         Intro: {intro}</br></br>\
         Article: {body}",
        admin = admin_user,
        site = site_name,
        keyword = draft.keyword(),
        hashtag = draft.hashtag(),
        title = draft.title(),
        slug = draft.slug(),
        url = draft.url(),
        posted = report.outcome().published.join(", "),
        failed = report.failed_targets().join("</br>"),
        intro = draft.intro(),
        body = draft.body(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazette_core::{CrosspostOutcome, PostDraft};

    fn report(microblog_error: Option<String>) -> RunReport {
        let draft = PostDraft::builder()
            .keyword("gardening")
            .hashtag("#gardening")
            .title("Five Gardening Myths")
            .slug("five-gardening-myths")
            .url("https://example.com/posts/five-gardening-myths")
            .intro("Everyone repeats them.")
            .body("The full article text.")
            .build()
            .unwrap();
        let mut outcome = CrosspostOutcome::default();
        outcome.record_success("ExampleBlog");
        outcome.record_success("Blogging");
        outcome.record_missing("blogs");
        RunReport::new(draft, outcome, microblog_error)
    }

    #[test]
    fn subject_names_site_and_title() {
        assert_eq!(
            compose_subject("Example Site", &report(None)),
            "Example Site - Five Gardening Myths"
        );
    }

    #[test]
    fn body_lists_successes_on_one_line() {
        let body = compose_body("Example Site", "Pat", &report(None));
        assert!(body.starts_with("Good day, Pat,</br></br>"));
        assert!(body.contains("Posted: ExampleBlog, Blogging</br>"));
        assert!(body.contains("Keyword: gardening</br>"));
        assert!(body.contains("Post URL: https://example.com/posts/five-gardening-myths"));
    }

    #[test]
    fn body_appends_microblog_failure_last() {
        let body = compose_body(
            "Example Site",
            "Pat",
            &report(Some("401 Unauthorized".to_string())),
        );
        assert!(body.contains(
            "Failed: </br>Reddit - blogs does not exist</br>twitter - 401 Unauthorized</br>"
        ));
    }
}
