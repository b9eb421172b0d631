use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Once;
use zip::write::SimpleFileOptions;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Write a zip archive at `path` containing `entries` (name, contents).
/// Names ending in `/` become directory entries.
pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let file = fs::File::create(path).expect("Failed to create zip fixture");
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (name, contents) in entries {
        if name.ends_with('/') {
            writer
                .add_directory(*name, options)
                .expect("Failed to add directory entry");
        } else {
            writer
                .start_file(*name, options)
                .expect("Failed to start zip entry");
            writer
                .write_all(contents)
                .expect("Failed to write zip entry");
        }
    }

    writer.finish().expect("Failed to finish zip fixture");
}

/// A minimal Ekahau-style project: floor plans, tag keys and access points.
pub fn write_sample_project(path: &Path) {
    write_zip(
        path,
        &[
            ("project.json", br#"{"project":{"name":"Warehouse"}}"#),
            (
                "floorPlans.json",
                br#"{"floorPlans":[
                    {"id":"fp-1","name":"Ground Floor","width":1200.0,"height":800.0,"imageId":"img-1"},
                    {"id":"fp-2","name":"First Floor"}
                ]}"#,
            ),
            (
                "tagKeys.json",
                br#"{"tagKeys":[{"id":"tk-1","key":"mount"},{"id":"tk-2","key":"switch-port"}]}"#,
            ),
            (
                "accessPoints.json",
                br#"{"accessPoints":[
                    {"id":"ap-1","name":"AP-01","location":{"floorPlanId":"fp-1"},
                     "tags":[{"tagKeyId":"tk-1","value":"ceiling"},{"tagKeyId":"tk-2","value":"Gi1/0/1"}]},
                    {"id":"ap-2","name":"AP-02","location":{"floorPlanId":"fp-2"},
                     "tags":[{"tagKeyId":"tk-1","value":"wall"}]},
                    {"id":"ap-3","name":"AP-03"}
                ]}"#,
            ),
            ("image-img-1", b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"),
            ("notes/", b""),
            ("notes/readme.txt", b"survey notes"),
        ],
    );
}
