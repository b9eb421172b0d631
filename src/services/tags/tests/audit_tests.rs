use super::*;
use crate::services::floor_plans::CatalogError;
use crate::services::project::unpack_project;
use crate::test_utils::write_sample_project;
use std::fs;
use tempfile::TempDir;

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn unpacked_sample() -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let archive = tmp.path().join("sample.esx");
    write_sample_project(&archive);
    let result = unpack_project(&tmp.path().join("ws"), "sample", &archive).unwrap();
    (tmp, result.dest_path)
}

#[test]
fn test_reports_access_points_missing_required_tags() {
    let (_tmp, project) = unpacked_sample();

    let offenders = audit_tags(&project, &keys(&["mount", "switch-port"])).unwrap();

    assert_eq!(
        offenders,
        vec![
            TagOffender {
                access_point: "AP-02".to_string(),
                floor_plan: Some("First Floor".to_string()),
                missing_keys: keys(&["switch-port"]),
            },
            TagOffender {
                access_point: "AP-03".to_string(),
                floor_plan: None,
                missing_keys: keys(&["mount", "switch-port"]),
            },
        ]
    );
}

#[test]
fn test_no_required_keys_means_no_offenders() {
    let (_tmp, project) = unpacked_sample();
    assert!(audit_tags(&project, &[]).unwrap().is_empty());
}

#[test]
fn test_blank_values_count_as_missing() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(TAG_KEYS_FILE),
        r#"{"tagKeys":[{"id":"k","key":"mount"}]}"#,
    )
    .unwrap();
    fs::write(
        tmp.path().join(ACCESS_POINTS_FILE),
        r#"{"accessPoints":[{"id":"ap-9","tags":[{"tagKeyId":"k","value":"  "}]}]}"#,
    )
    .unwrap();

    let offenders = audit_tags(tmp.path(), &keys(&["mount"])).unwrap();
    assert_eq!(offenders.len(), 1);
    // Falls back to the id when the access point has no name
    assert_eq!(offenders[0].access_point, "ap-9");
}

#[test]
fn test_missing_access_points_file() {
    let tmp = TempDir::new().unwrap();
    assert!(audit_tags(tmp.path(), &keys(&["mount"])).unwrap().is_empty());
}

#[test]
fn test_malformed_access_points_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(ACCESS_POINTS_FILE), "[broken").unwrap();
    let result = audit_tags(tmp.path(), &keys(&["mount"]));
    assert!(matches!(result, Err(CatalogError::Malformed { .. })));
}
