use lookout_core::LookoutError;
use serde::Deserialize;

/// GitHub Pull Request client for fetching changed files and posting comments.
///
/// # Examples
///
/// ```
/// use lookout_review::github::resolve_pr_number;
///
/// let number = resolve_pr_number(None, Some("refs/pull/456/merge")).unwrap();
/// assert_eq!(number, 456);
/// ```
pub struct GithubClient {
    octocrab: octocrab::Octocrab,
    http: reqwest::Client,
    token: String,
    repo: String,
}

impl GithubClient {
    /// Create a client from an explicit token and repository, or from the
    /// `GITHUB_TOKEN` and `GITHUB_REPOSITORY` environment variables.
    ///
    /// Construction performs no network activity.
    ///
    /// # Errors
    ///
    /// Returns [`LookoutError::Config`] if no token or repository is
    /// available, or [`LookoutError::Github`] if the client cannot be built.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lookout_review::github::GithubClient;
    ///
    /// let client = GithubClient::new(Some("ghp_xxxx"), Some("octocat/hello-world")).unwrap();
    /// ```
    pub fn new(token: Option<&str>, repo: Option<&str>) -> Result<Self, LookoutError> {
        let token = match token {
            Some(t) => t.to_string(),
            None => std::env::var("GITHUB_TOKEN").map_err(|_| {
                LookoutError::Config("GITHUB_TOKEN not set; the workflow must pass it in".into())
            })?,
        };
        let repo = match repo {
            Some(r) => r.to_string(),
            None => std::env::var("GITHUB_REPOSITORY").map_err(|_| {
                LookoutError::Config("GITHUB_REPOSITORY not set; expected owner/name".into())
            })?,
        };

        let octocrab = octocrab::Octocrab::builder()
            .personal_token(token.clone())
            .build()
            .map_err(|e| LookoutError::Github(format!("failed to create GitHub client: {e}")))?;

        let http = reqwest::Client::new();

        Ok(Self {
            octocrab,
            http,
            token,
            repo,
        })
    }

    /// Fetch the list of changed files for a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`LookoutError::Github`] on network or API errors.
    pub async fn list_changed_files(
        &self,
        pr_number: u64,
    ) -> Result<Vec<ChangedFile>, LookoutError> {
        let url = format!(
            "https://api.github.com/repos/{}/pulls/{pr_number}/files?per_page=100",
            self.repo
        );

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", "lookout")
            .send()
            .await
            .map_err(|e| LookoutError::Github(format!("failed to fetch PR files: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookoutError::Github(format!(
                "GitHub API error {status}: {body}"
            )));
        }

        response
            .json::<Vec<ChangedFile>>()
            .await
            .map_err(|e| LookoutError::Github(format!("failed to parse PR file list: {e}")))
    }

    /// Post a Markdown comment on a pull request.
    ///
    /// Uses the issue-comment API, so the comment appears in the PR
    /// conversation rather than attached to a diff line.
    ///
    /// # Errors
    ///
    /// Returns [`LookoutError::Github`] on API errors.
    pub async fn post_comment(&self, pr_number: u64, body: &str) -> Result<(), LookoutError> {
        let route = format!("/repos/{}/issues/{pr_number}/comments", self.repo);
        let payload = serde_json::json!({ "body": body });

        let _response: serde_json::Value = self
            .octocrab
            .post(route, Some(&payload))
            .await
            .map_err(|e| LookoutError::Github(format!("failed to post PR comment: {e}")))?;

        Ok(())
    }
}

/// One changed file in a pull request, as returned by the
/// `pulls/{number}/files` endpoint.
///
/// `patch` is absent for binary files and some renames.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangedFile {
    /// Path of the file within the repository.
    pub filename: String,
    /// Change status: `added`, `modified`, `removed`, or `renamed`.
    pub status: String,
    /// Number of added lines.
    pub additions: u64,
    /// Number of deleted lines.
    pub deletions: u64,
    /// Unified-diff patch text for the file.
    pub patch: Option<String>,
}

/// Render changed files into the single text blob sent to the LLM.
///
/// Emits four lines per file (name, status, counts, patch) followed by a
/// blank line, in the order the API returned them.
///
/// # Examples
///
/// ```
/// use lookout_review::github::{render_diff, ChangedFile};
///
/// let files = vec![ChangedFile {
///     filename: "src/lib.rs".into(),
///     status: "modified".into(),
///     additions: 2,
///     deletions: 1,
///     patch: Some("@@ -1 +1,2 @@".into()),
/// }];
/// let diff = render_diff(&files);
/// assert!(diff.starts_with("File: src/lib.rs\n"));
/// ```
pub fn render_diff(files: &[ChangedFile]) -> String {
    use std::fmt::Write;

    let mut diff = String::new();
    for file in files {
        let _ = writeln!(diff, "File: {}", file.filename);
        let _ = writeln!(diff, "Status: {}", file.status);
        let _ = writeln!(diff, "Changes: +{} -{}", file.additions, file.deletions);
        let _ = writeln!(diff, "Patch:\n{}\n", file.patch.as_deref().unwrap_or(""));
    }
    diff
}

/// Resolve the pull-request number from its two environment-derived sources.
///
/// An explicit, non-empty `GITHUB_EVENT_PULL_REQUEST_NUMBER` value wins;
/// otherwise a `GITHUB_REF` of the form `refs/pull/<digits>/merge` is used.
/// Non-numeric content in either source is an error rather than a fallthrough.
///
/// # Errors
///
/// Returns [`LookoutError::Config`] if neither source yields a number.
///
/// # Examples
///
/// ```
/// use lookout_review::github::resolve_pr_number;
///
/// assert_eq!(resolve_pr_number(Some("123"), None).unwrap(), 123);
/// assert_eq!(resolve_pr_number(None, Some("refs/pull/456/merge")).unwrap(), 456);
/// assert!(resolve_pr_number(None, Some("refs/heads/main")).is_err());
/// ```
pub fn resolve_pr_number(
    explicit: Option<&str>,
    github_ref: Option<&str>,
) -> Result<u64, LookoutError> {
    if let Some(raw) = explicit.filter(|v| !v.is_empty()) {
        return raw
            .trim()
            .parse()
            .map_err(|_| LookoutError::Config(format!("invalid PR number: '{raw}'")));
    }

    if let Some(reference) = github_ref {
        if let Some(middle) = reference
            .strip_prefix("refs/pull/")
            .and_then(|rest| rest.strip_suffix("/merge"))
        {
            return middle.parse().map_err(|_| {
                LookoutError::Config(format!("invalid PR number in ref: '{reference}'"))
            });
        }
    }

    Err(LookoutError::Config(
        "unable to determine PR number: set GITHUB_EVENT_PULL_REQUEST_NUMBER \
         or run on a refs/pull/<n>/merge ref"
            .into(),
    ))
}

/// Resolve the pull-request number from the process environment.
///
/// # Errors
///
/// Returns [`LookoutError::Config`] if neither `GITHUB_EVENT_PULL_REQUEST_NUMBER`
/// nor `GITHUB_REF` yields a number.
pub fn resolve_pr_number_from_env() -> Result<u64, LookoutError> {
    let explicit = std::env::var("GITHUB_EVENT_PULL_REQUEST_NUMBER").ok();
    let github_ref = std::env::var("GITHUB_REF").ok();
    resolve_pr_number(explicit.as_deref(), github_ref.as_deref())
}
