use std::path::Path;
use std::process::{Command, Output};

// Each test runs the binary with a scrubbed environment so ambient CI
// variables (GITHUB_REF in particular) cannot leak into the assertions.
fn run_lookout(dir: &Path, env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lookout"));
    cmd.current_dir(dir).env_clear();
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const FULL_ENV: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "test-key"),
    ("GITHUB_TOKEN", "test-token"),
    ("GITHUB_REPOSITORY", "octocat/hello-world"),
    ("GITHUB_EVENT_PULL_REQUEST_NUMBER", "123"),
];

#[test]
fn missing_api_key_fails_first() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_lookout(
        dir.path(),
        &[("GITHUB_EVENT_PULL_REQUEST_NUMBER", "123")],
    );

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("OPENAI_API_KEY"));
}

#[test]
fn unresolvable_pr_number_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_lookout(dir.path(), &[("OPENAI_API_KEY", "test-key")]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("unable to determine PR number"));
}

#[test]
fn branch_ref_does_not_resolve_a_pr_number() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_lookout(
        dir.path(),
        &[
            ("OPENAI_API_KEY", "test-key"),
            ("GITHUB_REF", "refs/heads/main"),
        ],
    );

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("unable to determine PR number"));
}

#[test]
fn missing_standards_file_fails_before_any_network() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_lookout(dir.path(), FULL_ENV);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("review_standards.json"));
}

#[test]
fn malformed_standards_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join(".github/config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("review_standards.json"), "{not json").unwrap();

    let output = run_lookout(dir.path(), FULL_ENV);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("invalid JSON"));
}

#[test]
fn merge_ref_resolves_and_reaches_config_loading() {
    let dir = tempfile::tempdir().unwrap();

    // Resolution from the ref succeeds, so the run fails later at the
    // missing standards file rather than at the resolver.
    let output = run_lookout(
        dir.path(),
        &[
            ("OPENAI_API_KEY", "test-key"),
            ("GITHUB_TOKEN", "test-token"),
            ("GITHUB_REPOSITORY", "octocat/hello-world"),
            ("GITHUB_REF", "refs/pull/456/merge"),
        ],
    );

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(!stderr.contains("unable to determine PR number"));
    assert!(stderr.contains("review_standards.json"));
}
