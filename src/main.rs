//! CI entry point: post an AI review comment on the current pull request.
//!
//! Invocation is argument-free. Everything is driven by the environment
//! (`OPENAI_API_KEY`, `OPENAI_API_ENDPOINT`, `GITHUB_TOKEN`,
//! `GITHUB_REPOSITORY`, `GITHUB_EVENT_PULL_REQUEST_NUMBER`, `GITHUB_REF`)
//! and the JSON files under `.github/config/`.

use std::path::Path;

use miette::Result;

use lookout_core::{PromptTemplates, ReviewStandards, CONFIG_DIR};
use lookout_review::github::{self, GithubClient};
use lookout_review::llm::LlmClient;
use lookout_review::pipeline::ReviewPipeline;

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    // API-key precondition comes first; nothing touches the network until
    // the diff fetch inside the pipeline.
    let llm = LlmClient::from_env()?;
    let pr_number = github::resolve_pr_number_from_env()?;
    let github = GithubClient::new(None, None)?;

    let config_dir = Path::new(CONFIG_DIR);
    let standards = ReviewStandards::from_file(&config_dir.join("review_standards.json"))?;
    let prompts = PromptTemplates::load(&config_dir.join("prompts.json"))?;

    let pipeline = ReviewPipeline::new(github, llm, standards, prompts);
    pipeline.run(pr_number).await?;
    eprintln!("Posted review comment to PR #{pr_number}");

    Ok(())
}
