use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_missing_file_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let service = ConfigService::load(tmp.path().join(SETTINGS_FILE));

    let settings = service.get_settings();
    assert_eq!(settings, AppSettings::default());
    assert!(settings.required_tag_keys.is_empty());
    assert_eq!(settings.update.timeout_secs, 10);
}

#[test]
fn test_load_malformed_file_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(SETTINGS_FILE);
    fs::write(&path, "{ definitely not json").unwrap();

    let service = ConfigService::load(path);
    assert_eq!(service.get_settings(), AppSettings::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(SETTINGS_FILE);
    fs::write(
        &path,
        r#"{"required_tag_keys": ["mount"], "update": {"branch": "release"}}"#,
    )
    .unwrap();

    let settings = ConfigService::load(path).get_settings();
    assert_eq!(settings.required_tag_keys, vec!["mount"]);
    assert_eq!(settings.update.branch, "release");
    assert_eq!(settings.update.api_base, "https://api.github.com");
}

#[test]
fn test_save_and_reload() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config").join(SETTINGS_FILE);
    let service = ConfigService::new(path.clone());

    let mut settings = service.get_settings();
    settings.workspace_dir = Some(tmp.path().join("surveys"));
    settings.required_tag_keys = vec!["mount".into(), "switch-port".into()];
    service.save_settings(settings.clone()).unwrap();

    assert_eq!(service.get_settings(), settings);
    assert_eq!(ConfigService::load(path).get_settings(), settings);
}

#[test]
fn test_repeated_saves_overwrite() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(SETTINGS_FILE);
    let service = ConfigService::new(path.clone());

    let mut first = service.get_settings();
    first.update.branch = "dev".into();
    service.save_settings(first).unwrap();

    let mut second = service.get_settings();
    second.update.owner = "surveyor".into();
    service.save_settings(second).unwrap();

    let saved: AppSettings = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved.update.branch, "dev");
    assert_eq!(saved.update.owner, "surveyor");
}

#[test]
fn test_workspace_dir_fallback() {
    let tmp = TempDir::new().unwrap();
    let service = ConfigService::new(tmp.path().join(SETTINGS_FILE));
    let fallback = tmp.path().join("projects");
    assert_eq!(service.workspace_dir(&fallback), fallback);
}

#[test]
fn test_commits_url() {
    let source = UpdateSource {
        api_base: "https://api.github.com/".into(),
        ..UpdateSource::default()
    };
    assert_eq!(
        source.commits_url(),
        "https://api.github.com/repos/esx-toolkit/esx-toolkit/commits/main"
    );
}
