use std::path::PathBuf;
use std::process::{Command, Output};

/// Empty working directory so no stray .env file is picked up
fn work_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("askrun-cli-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Endpoint on a port nothing listens on
fn dead_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    endpoint
}

fn askrun(name: &str, envs: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_askrun"));
    cmd.current_dir(work_dir(name));
    for var in [
        "GEMINI_API_KEY",
        "GEMINI_ENDPOINT",
        "GEMINI_MODEL",
        "GEMINI_TIMEOUT_SECS",
    ] {
        cmd.env_remove(var);
    }
    cmd.envs(envs.iter().copied()).args(args);
    cmd.output().expect("Failed to run askrun")
}

#[test]
fn test_missing_key_exits_with_one() {
    let output = askrun("missing-key", &[("GEMINI_API_KEY", "")], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("GEMINI_API_KEY"), "stderr: {}", stderr);
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Test complete"));
}

#[test]
fn test_call_failures_still_exit_zero() {
    let endpoint = dead_endpoint();
    let output = askrun(
        "call-failures",
        &[("GEMINI_API_KEY", "test-key"), ("GEMINI_ENDPOINT", &endpoint)],
        &["--query", "hello", "--command", "echo hi"],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Sending query to Gemini: 'hello'"));
    assert!(stdout.contains("Sorry, I couldn't get a response from the API."));
    assert!(stdout.contains("hi\n"));
    assert!(stdout.contains("--- Test complete ---"));
}

#[test]
fn test_empty_query_skips_sending_banner() {
    let endpoint = dead_endpoint();
    let output = askrun(
        "empty-query",
        &[("GEMINI_API_KEY", "test-key"), ("GEMINI_ENDPOINT", &endpoint)],
        &["--query", "", "--command", "true"],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout.contains("Sending query"), "stdout: {}", stdout);
    assert!(stdout.contains("Error: No query provided."));
}
