use lookout_core::PromptTemplates;

/// Build the user prompt for the summary request.
///
/// # Examples
///
/// ```
/// use lookout_core::PromptTemplates;
/// use lookout_review::prompt::build_summarize_prompt;
///
/// let templates = PromptTemplates::default();
/// let prompt = build_summarize_prompt(&templates, "File: a.rs");
/// assert!(prompt.contains("File: a.rs"));
/// assert!(!prompt.contains("{diff}"));
/// ```
pub fn build_summarize_prompt(templates: &PromptTemplates, diff: &str) -> String {
    templates.summarize_prompt.replace("{diff}", diff)
}

/// Build the user prompt for the review request.
///
/// `standards` is the JSON-serialized standards blob; both placeholders are
/// substituted.
///
/// # Examples
///
/// ```
/// use lookout_core::PromptTemplates;
/// use lookout_review::prompt::build_review_prompt;
///
/// let templates = PromptTemplates::default();
/// let prompt = build_review_prompt(&templates, r#"["clarity"]"#, "File: a.rs");
/// assert!(prompt.contains(r#"["clarity"]"#));
/// assert!(prompt.contains("File: a.rs"));
/// ```
pub fn build_review_prompt(templates: &PromptTemplates, standards: &str, diff: &str) -> String {
    templates
        .review_prompt
        .replace("{standards}", standards)
        .replace("{diff}", diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates(summarize: &str, review: &str) -> PromptTemplates {
        PromptTemplates {
            system_role: "role".into(),
            summarize_prompt: summarize.into(),
            review_prompt: review.into(),
        }
    }

    #[test]
    fn summarize_prompt_substitutes_diff() {
        let t = templates("Summarize:\n{diff}", "unused");
        assert_eq!(
            build_summarize_prompt(&t, "File: a.rs"),
            "Summarize:\nFile: a.rs"
        );
    }

    #[test]
    fn review_prompt_substitutes_both_placeholders() {
        let t = templates("unused", "Standards: {standards}\nChanges: {diff}");
        assert_eq!(
            build_review_prompt(&t, r#"{"style":"strict"}"#, "File: a.rs"),
            "Standards: {\"style\":\"strict\"}\nChanges: File: a.rs"
        );
    }

    #[test]
    fn default_templates_round_trip() {
        let t = PromptTemplates::default();
        let prompt = build_review_prompt(&t, r#"["clarity"]"#, "File: a.rs\n");
        assert!(prompt.starts_with("Review the following code changes"));
        assert!(prompt.contains(r#"["clarity"]"#));
        assert!(prompt.ends_with("At the end provide an overall review."));
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let t = templates("static prompt", "static prompt");
        assert_eq!(build_summarize_prompt(&t, "ignored"), "static prompt");
    }
}
