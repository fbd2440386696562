/// Assemble the Markdown comment body posted to the pull request.
///
/// Fixed two-section layout: a summary section and a review section, each
/// labeled with the model that produced it.
///
/// # Examples
///
/// ```
/// use lookout_review::comment::build_comment_body;
///
/// let body = build_comment_body("gpt-4o", "Adds a parser.", "gpt-4", "4/5, looks solid.");
/// assert!(body.starts_with("## AI Pull Request Review"));
/// assert!(body.contains("(using gpt-4o)"));
/// ```
pub fn build_comment_body(
    summary_model: &str,
    summary: &str,
    review_model: &str,
    review: &str,
) -> String {
    format!(
        "## AI Pull Request Review\n\n\
         ### Summary of Changes (using {summary_model})\n{summary}\n\n\
         ### Code Review (using {review_model})\n{review}"
    )
}
