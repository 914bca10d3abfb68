use std::process::Command;

use httpmock::prelude::*;
use serde_json::json;

fn skyluxe(server: &MockServer) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_skyluxe"));
    command
        .args(["--config", "does-not-exist.toml", "-o", "DEL", "-d", "DXB"])
        .env("GATEWAY_URL", server.base_url())
        .env_remove("RUST_LOG");
    command
}

#[test]
fn test_results_on_stdout_logs_on_stderr() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/search-flight");
        then.status(200).json_body(json!([{
            "owner": { "name": "Emirates" },
            "total_amount": "100.00"
        }]));
    });

    let output = skyluxe(&server).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(stdout, "1. Emirates  $110.00  DEL ➔ DXB\n");
    assert!(stderr.contains("using gateway at"));
    assert!(stderr.contains("found 1 flights"));
}

#[test]
fn test_failed_search_logs_stay_off_stdout() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/search-flight");
        then.status(200).body("not json");
    });

    let output = skyluxe(&server).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(stdout.starts_with("Search Failed: Could not find flights."));
    assert!(!stdout.contains("search failed:"));
    assert!(stderr.contains("search failed:"));
}
