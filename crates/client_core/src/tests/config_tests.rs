use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

fn write_temp_config(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("pdf_assistant_config_test_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = resolve_settings(None, env_from(&[])).expect("settings");
    assert_eq!(settings, ClientSettings::default());
    assert_eq!(settings.api_base_url, "http://127.0.0.1:8000");
}

#[test]
fn file_values_override_defaults() {
    let path = write_temp_config(
        "api_base_url = \"https://docs.example.com/api/\"\nlog_filter = \"debug\"\n",
    );
    let settings = resolve_settings(Some(&path), env_from(&[])).expect("settings");
    assert_eq!(settings.api_base_url, "https://docs.example.com/api");
    assert_eq!(settings.log_filter, "debug");

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn env_overrides_file_and_app_prefixed_name_wins() {
    let path = write_temp_config("api_base_url = \"http://from-file:8000\"\n");
    let settings = resolve_settings(
        Some(&path),
        env_from(&[
            ("PDF_ASSISTANT_API_URL", "http://from-env:8000"),
            ("APP__API_BASE_URL", "http://from-app-env:8000//"),
            ("RUST_LOG", "warn"),
            ("PDF_ASSISTANT_LOG", "client_core=trace"),
        ]),
    )
    .expect("settings");

    assert_eq!(settings.api_base_url, "http://from-env:8000");
    assert_eq!(settings.log_filter, "client_core=trace");

    let generic_only = resolve_settings(
        Some(&path),
        env_from(&[
            ("APP__API_BASE_URL", "http://from-app-env:8000//"),
            ("RUST_LOG", "warn"),
        ]),
    )
    .expect("settings");
    assert_eq!(generic_only.api_base_url, "http://from-app-env:8000");
    assert_eq!(generic_only.log_filter, "warn");

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn blank_values_are_ignored_at_every_layer() {
    let path = write_temp_config("api_base_url = \"   \"\nlog_filter = \"\"\n");
    let settings = resolve_settings(
        Some(&path),
        env_from(&[("PDF_ASSISTANT_API_URL", "  ")]),
    )
    .expect("settings");
    assert_eq!(settings, ClientSettings::default());

    let overridden = settings.with_api_base_url_override(Some(" ".to_string()));
    assert_eq!(overridden.api_base_url, DEFAULT_API_BASE_URL);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn flag_override_beats_environment() {
    let settings = resolve_settings(None, env_from(&[("PDF_ASSISTANT_API_URL", "http://env:1")]))
        .expect("settings")
        .with_api_base_url_override(Some("http://flag:2/".to_string()));
    assert_eq!(settings.api_base_url, "http://flag:2");
}

#[test]
fn unknown_keys_are_a_parse_error() {
    let path = write_temp_config("api_url = \"http://typo\"\n");
    let err = resolve_settings(Some(&path), env_from(&[])).expect_err("unknown key");
    assert!(matches!(err, ConfigError::Parse { .. }));

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn missing_explicit_file_is_a_read_error() {
    let missing = env::temp_dir().join("pdf_assistant_missing_dir").join(CONFIG_FILE_NAME);
    let err = resolve_settings(Some(&missing), env_from(&[])).expect_err("missing file");
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn explicit_config_env_var_takes_precedence_over_fallback_dir() {
    let located = locate_config_file(
        Some(Path::new("/nonexistent/fallback")),
        env_from(&[(CONFIG_PATH_ENV, "/etc/pdf_assistant/custom.toml")]),
    );
    assert_eq!(located, Some(PathBuf::from("/etc/pdf_assistant/custom.toml")));
}
