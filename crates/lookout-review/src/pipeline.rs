use lookout_core::{LookoutError, PromptTemplates, ReviewStandards};

use crate::comment;
use crate::github::{self, GithubClient};
use crate::llm::{ChatMessage, LlmClient, Role};
use crate::model;
use crate::prompt;

/// Orchestrates one review run: fetch the diff, make the two LLM requests,
/// post the combined comment.
pub struct ReviewPipeline {
    github: GithubClient,
    llm: LlmClient,
    standards: ReviewStandards,
    prompts: PromptTemplates,
}

impl ReviewPipeline {
    /// Create a pipeline from already-constructed clients and loaded config.
    pub fn new(
        github: GithubClient,
        llm: LlmClient,
        standards: ReviewStandards,
        prompts: PromptTemplates,
    ) -> Self {
        Self {
            github,
            llm,
            standards,
            prompts,
        }
    }

    /// Run the full review for one pull request and return the posted
    /// comment body.
    ///
    /// The sequence is strictly linear: changed files are fetched and
    /// rendered, the summary and review requests run one after the other,
    /// and the combined Markdown comment is posted. Any failure aborts the
    /// run.
    ///
    /// # Errors
    ///
    /// Returns [`LookoutError::Github`] on GitHub API failures,
    /// [`LookoutError::Llm`] on LLM failures, and
    /// [`LookoutError::Serialization`] if the standards blob cannot be
    /// re-serialized for the prompt.
    pub async fn run(&self, pr_number: u64) -> Result<String, LookoutError> {
        let files = self.github.list_changed_files(pr_number).await?;
        let diff = github::render_diff(&files);

        let summary_model = model::validate_model(self.standards.summary_model());
        let review_model = model::validate_model(self.standards.review_model());

        let summary = self
            .chat(
                summary_model,
                prompt::build_summarize_prompt(&self.prompts, &diff),
            )
            .await?;

        let standards_json = serde_json::to_string(&self.standards.standards)?;
        let review = self
            .chat(
                review_model,
                prompt::build_review_prompt(&self.prompts, &standards_json, &diff),
            )
            .await?;

        let body = comment::build_comment_body(summary_model, &summary, review_model, &review);
        self.github.post_comment(pr_number, &body).await?;

        Ok(body)
    }

    async fn chat(&self, model: &str, user_prompt: String) -> Result<String, LookoutError> {
        let messages = vec![
            ChatMessage {
                role: Role::System,
                content: self.prompts.system_role.clone(),
            },
            ChatMessage {
                role: Role::User,
                content: user_prompt,
            },
        ];
        self.llm.chat(model, messages).await
    }
}

#[cfg(test)]
mod tests {
    use lookout_core::{PromptTemplates, ReviewStandards};

    use crate::comment;
    use crate::github::{render_diff, ChangedFile};
    use crate::prompt;

    fn two_file_diff() -> String {
        render_diff(&[
            ChangedFile {
                filename: "src/lib.rs".into(),
                status: "modified".into(),
                additions: 4,
                deletions: 1,
                patch: Some("@@ -1 +1,4 @@".into()),
            },
            ChangedFile {
                filename: "docs/usage.md".into(),
                status: "added".into(),
                additions: 12,
                deletions: 0,
                patch: Some("@@ -0,0 +1,12 @@".into()),
            },
        ])
    }

    // Full run with the two LLM responses mocked out: everything around
    // the chat calls is deterministic string assembly.
    #[test]
    fn mocked_responses_produce_the_fixed_comment_body() {
        let standards = ReviewStandards::from_json(
            r#"{"standards": ["clarity"], "summary_model": "gpt-4", "review_model": "gpt-4"}"#,
        )
        .unwrap();
        let prompts = PromptTemplates::default();
        let diff = two_file_diff();

        let summary_prompt = prompt::build_summarize_prompt(&prompts, &diff);
        assert!(summary_prompt.contains("File: src/lib.rs"));
        assert!(summary_prompt.contains("File: docs/usage.md"));

        let standards_json = serde_json::to_string(&standards.standards).unwrap();
        let review_prompt = prompt::build_review_prompt(&prompts, &standards_json, &diff);
        assert!(review_prompt.contains(r#"["clarity"]"#));
        assert!(review_prompt.contains("File: docs/usage.md"));

        let body = comment::build_comment_body(
            standards.summary_model(),
            "SUMMARY_TEXT",
            standards.review_model(),
            "REVIEW_TEXT",
        );
        assert_eq!(
            body,
            "## AI Pull Request Review\n\n\
             ### Summary of Changes (using gpt-4)\nSUMMARY_TEXT\n\n\
             ### Code Review (using gpt-4)\nREVIEW_TEXT"
        );
    }
}
