use std::io::{Cursor, Read};

use brick_studio::delivery::MemoryDelivery;
use brick_studio::draft::Draft;
use brick_studio::manifest::{Manifest, ManifestField};
use brick_studio::package::{self, Artifact, PackageMode};

const MANIFEST_JSON: &str = r#"{
  "name": "demo",
  "description": "d",
  "variant": "v",
  "os": "ubuntu",
  "version": "22.04",
  "release": "v1.0",
  "author": "a",
  "contact": "c"
}"#;

fn scenario_draft() -> Draft {
    let mut manifest = Manifest::default();
    for (field, value) in [
        (ManifestField::Name, "demo"),
        (ManifestField::Description, "d"),
        (ManifestField::Variant, "v"),
        (ManifestField::Os, "ubuntu"),
        (ManifestField::Version, "22.04"),
        (ManifestField::Release, "v1.0"),
        (ManifestField::Author, "a"),
        (ManifestField::Contact, "c"),
    ] {
        manifest.set(field, value);
    }
    Draft {
        document: "Hello".to_owned(),
        script: "#!/bin/sh\necho hi".to_owned(),
        manifest,
    }
}

fn find<'a>(artifacts: &'a [Artifact], name: &str) -> &'a Artifact {
    artifacts
        .iter()
        .find(|artifact| artifact.filename == name)
        .unwrap_or_else(|| panic!("{name} missing"))
}

fn read_entry(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut contents = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    contents
}

#[test]
fn test_loose_mode_yields_three_files() {
    let artifacts = package::package(&scenario_draft(), PackageMode::Loose).unwrap();

    assert_eq!(artifacts.len(), 3);
    assert_eq!(find(&artifacts, "README.md").bytes, b"Hello");
    assert_eq!(find(&artifacts, "template.sh").bytes, b"#!/bin/sh\necho hi");
    assert_eq!(find(&artifacts, "brick.json").bytes, MANIFEST_JSON.as_bytes());
}

#[test]
fn test_archive_mode_yields_one_named_archive() {
    let artifacts = package::package(&scenario_draft(), PackageMode::Archive).unwrap();

    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0].filename, "brick_demo_v1.0.zip");

    let mut archive = zip::ZipArchive::new(Cursor::new(artifacts[0].bytes.clone())).unwrap();
    assert_eq!(archive.len(), 3);
    assert_eq!(read_entry(&mut archive, "README.md"), "Hello");
    assert_eq!(read_entry(&mut archive, "template.sh"), "#!/bin/sh\necho hi");
    assert_eq!(read_entry(&mut archive, "brick.json"), MANIFEST_JSON);
}

#[test]
fn test_archive_marks_script_executable() {
    let artifacts = package::package(&scenario_draft(), PackageMode::Archive).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(artifacts[0].bytes.clone())).unwrap();

    let mode = archive.by_name("template.sh").unwrap().unix_mode().unwrap();
    assert_eq!(mode & 0o777, 0o755);
    let mode = archive.by_name("brick.json").unwrap().unix_mode().unwrap();
    assert_eq!(mode & 0o777, 0o644);
}

#[test]
fn test_packaging_is_deterministic() {
    let draft = scenario_draft();
    for mode in [PackageMode::Loose, PackageMode::Archive] {
        let first = package::package(&draft, mode).unwrap();
        let second = package::package(&draft, mode).unwrap();
        assert_eq!(first, second, "{mode:?} output differs between runs");
    }
}

#[test]
fn test_archive_name_is_sanitized() {
    let mut draft = scenario_draft();
    draft.manifest.set(ManifestField::Name, "My App/v2");
    draft.manifest.set(ManifestField::Release, "1.0 beta");

    let artifacts = package::package(&draft, PackageMode::Archive).unwrap();
    assert_eq!(artifacts[0].filename, "brick_My_App_v2_1.0_beta.zip");
}

#[test]
fn test_archive_name_falls_back_for_empty_fields() {
    let draft = Draft {
        manifest: Manifest::default(),
        ..scenario_draft()
    };

    let artifacts = package::package(&draft, PackageMode::Archive).unwrap();
    assert_eq!(artifacts[0].filename, "brick_brick_release.zip");
}

#[test]
fn test_export_delivers_every_artifact_in_order() {
    let mut delivery = MemoryDelivery::new();
    let draft = scenario_draft();

    let names = package::export(&draft, PackageMode::Loose, &mut delivery).unwrap();

    assert_eq!(names, vec!["template.sh", "README.md", "brick.json"]);
    let delivered = delivery.delivered();
    assert_eq!(delivered, package::package(&draft, PackageMode::Loose).unwrap());
}
