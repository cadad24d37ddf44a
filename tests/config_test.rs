//! Tests for judge configuration loading.

use crew_draft::{JudgeConfig, LlmProvider};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_loads_full_config_from_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
provider = "openai"
model = "gpt-4o-mini"
max_tokens = 256
max_attempts = 5
retry_base_ms = 250
"#
    )
    .unwrap();

    let config = JudgeConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.provider(), LlmProvider::OpenAI);
    assert_eq!(config.model().as_str(), "gpt-4o-mini");
    assert_eq!(*config.max_tokens(), 256);

    let policy = config.retry_policy();
    assert_eq!(policy.max_attempts, 5);
    assert_eq!(policy.base_delay, Duration::from_millis(250));
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"model = "gemini-2.5-pro""#).unwrap();

    let config = JudgeConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.provider(), LlmProvider::Gemini);
    assert_eq!(config.model().as_str(), "gemini-2.5-pro");
    assert_eq!(config.retry_policy().max_attempts, 3);
    assert_eq!(
        config.retry_policy().base_delay,
        Duration::from_millis(1000)
    );
}

#[test]
fn test_unreadable_file_is_an_error() {
    let err = JudgeConfig::from_file("/nonexistent/judge_config.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_garbage_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "provider = [whoops").unwrap();
    let err = JudgeConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}
