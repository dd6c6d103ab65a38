//! Integration tests for manifest export.

use citymaps_router::Revision;
use citymaps_router::manifest;
use citymaps_runtime::export::{load_manifest, save_manifest};

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("citymaps-{label}-{}.json", std::process::id()))
}

#[test]
fn every_revision_exports_and_reloads() {
    for revision in Revision::ALL {
        let path = temp_path(revision.as_str());
        save_manifest(revision.table(), &path).unwrap();
        let loaded = load_manifest(&path).unwrap();
        assert_eq!(loaded, manifest::manifest(revision.table()), "{revision}");
        let _ = std::fs::remove_file(&path);
    }
}

#[test]
fn manifest_uses_front_end_shape() {
    let json = manifest::to_json(Revision::ModeShare.table()).unwrap();
    assert!(json.contains("\"path\": \"/emissions\""));
    assert!(json.contains("\"component\": \"EmissionsBase\""));
    assert!(json.contains("\"name\": \"ROOT_ABOUT\""));
    assert!(json.contains("\"redirect\""));
}

#[test]
fn corrupt_manifest_is_an_error() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_manifest(&path).unwrap_err();
    assert!(err.context.is_some());
    let _ = std::fs::remove_file(&path);
}
