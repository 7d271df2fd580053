// Shared test helpers for mock provider setup and fixture loading.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::Value;
use wiremock::MockServer;

use speed_test::audit::PageSpeedResponse;
use speed_test::{Config, LogFormat, LogLevel, StrategyChoice};

/// Path the mock provider serves audits on.
pub const RUN_PATH: &str = "/pagespeedonline/v5/runPagespeed";

/// API key used by every test client.
pub const TEST_KEY: &str = "test-key";

/// Loads the recorded provider response as JSON.
#[allow(dead_code)] // Used by other test files
pub fn fixture_json() -> Value {
    serde_json::from_str(include_str!("fixtures/psi_response.json"))
        .expect("Fixture should be valid JSON")
}

/// Loads the recorded provider response as a parsed document.
#[allow(dead_code)]
pub fn fixture_response() -> PageSpeedResponse {
    PageSpeedResponse::from_json(include_str!("fixtures/psi_response.json"))
        .expect("Fixture should parse")
}

/// Parses an inline JSON document.
#[allow(dead_code)]
pub fn parse(value: Value) -> PageSpeedResponse {
    serde_json::from_value(value).expect("Document should parse")
}

/// Full endpoint URL on a mock server.
#[allow(dead_code)]
pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), RUN_PATH)
}

/// Creates a Config pointed at a mock server.
#[allow(dead_code)]
pub fn create_test_config(server: &MockServer, strategy: StrategyChoice) -> Config {
    Config {
        url: "example.com".to_string(),
        api_key: Some(TEST_KEY.to_string()),
        strategy,
        endpoint: endpoint(server),
        timeout_seconds: 5,
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}
