use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LookoutError;

/// Directory holding the two JSON config files, relative to the checkout root.
pub const CONFIG_DIR: &str = ".github/config";

/// Model used for both the summary and the review unless overridden.
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Review standards loaded from `review_standards.json`.
///
/// The `standards` value is opaque to Lookout: it is re-serialized verbatim
/// into the review prompt and never interpreted. The file is required; a
/// missing or malformed file is fatal.
///
/// # Examples
///
/// ```
/// use lookout_core::ReviewStandards;
///
/// let standards = ReviewStandards::from_json(r#"{"standards": ["clarity"]}"#).unwrap();
/// assert_eq!(standards.summary_model(), "gpt-4-turbo");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewStandards {
    /// Standards blob passed through to the review prompt.
    pub standards: serde_json::Value,
    /// Model override for the summary request.
    pub summary_model: Option<String>,
    /// Model override for the review request.
    pub review_model: Option<String>,
}

impl ReviewStandards {
    /// Load review standards from a JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LookoutError::FileNotFound`] if the file does not exist,
    /// [`LookoutError::Config`] if the content is not valid JSON or lacks
    /// the `standards` key, or [`LookoutError::Io`] on other read failures.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lookout_core::ReviewStandards;
    /// use std::path::Path;
    ///
    /// let standards =
    ///     ReviewStandards::from_file(Path::new(".github/config/review_standards.json")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, LookoutError> {
        let content = read_config_file(path)?;
        serde_json::from_str(&content).map_err(|e| {
            LookoutError::Config(format!("invalid JSON in {}: {e}", path.display()))
        })
    }

    /// Parse review standards from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LookoutError::Serialization`] if parsing fails.
    pub fn from_json(content: &str) -> Result<Self, LookoutError> {
        let standards: Self = serde_json::from_str(content)?;
        Ok(standards)
    }

    /// Model to use for the summary request.
    pub fn summary_model(&self) -> &str {
        self.summary_model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Model to use for the review request.
    pub fn review_model(&self) -> &str {
        self.review_model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

/// Prompt templates loaded from `prompts.json`.
///
/// The file is optional: when absent, the built-in templates below are used.
/// A file that exists but contains malformed JSON is fatal — only a missing
/// file falls back to defaults. Keys omitted from a present file fall back
/// per key.
///
/// Templates are plain strings with `{diff}` and `{standards}` placeholders.
///
/// # Examples
///
/// ```
/// use lookout_core::PromptTemplates;
///
/// let templates = PromptTemplates::default();
/// assert!(templates.summarize_prompt.contains("{diff}"));
/// assert!(templates.review_prompt.contains("{standards}"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplates {
    /// System message sent with every chat request.
    #[serde(default = "default_system_role")]
    pub system_role: String,
    /// Template for the summary request; `{diff}` placeholder.
    #[serde(default = "default_summarize_prompt")]
    pub summarize_prompt: String,
    /// Template for the review request; `{standards}` and `{diff}` placeholders.
    #[serde(default = "default_review_prompt")]
    pub review_prompt: String,
}

fn default_system_role() -> String {
    "You are a helpful assistant that reviews pull requests code and its changes.".into()
}

fn default_summarize_prompt() -> String {
    "Summarize the following code changes:\n\n{diff}".into()
}

fn default_review_prompt() -> String {
    "Review the following code changes and give them a note from 0 to 5, \
     based on these standards:\n{standards}\n\n\
     Code changes:\n{diff}\n\
     At the end provide an overall review."
        .into()
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            system_role: default_system_role(),
            summarize_prompt: default_summarize_prompt(),
            review_prompt: default_review_prompt(),
        }
    }
}

impl PromptTemplates {
    /// Load prompt templates from a JSON file at `path`, falling back to
    /// the built-in defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`LookoutError::Config`] if the file exists but is not valid
    /// JSON, or [`LookoutError::Io`] on other read failures. A missing file
    /// is not an error.
    pub fn load(path: &Path) -> Result<Self, LookoutError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&content).map_err(|e| {
            LookoutError::Config(format!("invalid JSON in {}: {e}", path.display()))
        })
    }

    /// Parse prompt templates from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LookoutError::Serialization`] if parsing fails.
    pub fn from_json(content: &str) -> Result<Self, LookoutError> {
        let templates: Self = serde_json::from_str(content)?;
        Ok(templates)
    }
}

fn read_config_file(path: &Path) -> Result<String, LookoutError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LookoutError::FileNotFound(path.to_path_buf()),
        _ => LookoutError::Io(e),
    })
}
