use super::*;

use std::fs::{File, create_dir};

fn names(datasets: &[Dataset]) -> Vec<&str> {
    datasets.iter().map(Dataset::name).collect()
}

// =============================================================================
// qualifies
// =============================================================================

#[test]
fn qualifies_plain_directory() {
    assert!(qualifies("bimba", true));
    assert!(qualifies("rocker_arm", true));
}

#[test]
fn qualifies_rejects_files() {
    assert!(!qualifies("bimba", false));
}

#[test]
fn qualifies_rejects_hidden_entries() {
    assert!(!qualifies(".git", true));
    assert!(!qualifies(".cache", true));
}

#[test]
fn qualifies_rejects_names_with_extension() {
    assert!(!qualifies("readme.txt", true));
    assert!(!qualifies("v1.2", true));
    assert!(!qualifies("trailing.", true));
}

#[test]
fn qualifies_rejects_empty_name() {
    assert!(!qualifies("", true));
}

// =============================================================================
// path derivation
// =============================================================================

#[test]
fn derived_paths_follow_naming_convention() {
    let ds = Dataset::new("bimba");
    assert_eq!(ds.top_image(), "bimba/bimba.obj.jpg");
    assert_eq!(
        ds.bottom_image(),
        "bimba/bimba_rem_p0_0_quadrangulation_smooth.obj.jpg"
    );
    assert_eq!(ds.input_archive(), "bimba/bimba.zip");
    assert_eq!(
        ds.output_archive(),
        "bimba/bimba_rem_p0_0_quadrangulation_smooth.zip"
    );
}

#[test]
fn histograms_in_display_order() {
    let ds = Dataset::new("bimba");
    let paths: Vec<String> = ds.histograms().into_iter().map(|(_, p)| p).collect();
    assert_eq!(
        paths,
        vec![
            "bimba/edgeLenHistogram.png",
            "bimba/flatnessHistogram.png",
            "bimba/torsionHistogram.png",
            "bimba/voroAreaHistogram.png",
        ]
    );
}

#[test]
fn derived_paths_are_deterministic() {
    let a = Dataset::new("fandisk");
    let b = Dataset::new("fandisk");
    assert_eq!(a.top_image(), b.top_image());
    assert_eq!(a.bottom_image(), b.bottom_image());
    assert_eq!(a.histograms(), b.histograms());
    assert_eq!(a.input_archive(), b.input_archive());
    assert_eq!(a.output_archive(), b.output_archive());
}

#[test]
fn histogram_titles_are_distinct() {
    let titles: Vec<&str> = HistogramKind::ALL.iter().map(|k| k.title()).collect();
    assert_eq!(titles[0], "Edge Length distribution");
    assert_eq!(titles[3], "Voronoi Area distribution");
    for (i, t) in titles.iter().enumerate() {
        assert!(!titles[i + 1..].contains(t));
    }
}

// =============================================================================
// list_datasets
// =============================================================================

#[test]
fn list_datasets_filters_non_qualifying_entries() {
    let dir = tempfile::tempdir().unwrap();
    create_dir(dir.path().join("bimba")).unwrap();
    create_dir(dir.path().join(".git")).unwrap();
    create_dir(dir.path().join("old.backup")).unwrap();
    File::create(dir.path().join("readme.txt")).unwrap();
    File::create(dir.path().join("notes")).unwrap();

    let datasets = list_datasets(dir.path()).unwrap();
    assert_eq!(names(&datasets), vec!["bimba"]);
}

#[test]
fn list_datasets_empty_root() {
    let dir = tempfile::tempdir().unwrap();
    assert!(list_datasets(dir.path()).unwrap().is_empty());
}

#[test]
fn list_datasets_returns_every_qualifying_folder() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["bimba", "fandisk", "rocker_arm"] {
        create_dir(dir.path().join(name)).unwrap();
    }

    let mut found: Vec<String> = list_datasets(dir.path())
        .unwrap()
        .iter()
        .map(|d| d.name().to_string())
        .collect();
    found.sort();
    assert_eq!(found, vec!["bimba", "fandisk", "rocker_arm"]);
}

#[test]
fn list_datasets_missing_root_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = list_datasets(&missing).unwrap_err();
    assert!(matches!(err, ScanError::ReadRoot { .. }));
    assert!(err.to_string().contains("cannot read gallery root"));
}

#[cfg(unix)]
#[test]
fn list_datasets_follows_directory_symlinks() {
    let dir = tempfile::tempdir().unwrap();
    let target = tempfile::tempdir().unwrap();
    let link = dir.path().join("linked");
    std::os::unix::fs::symlink(target.path(), link).unwrap();

    let datasets = list_datasets(dir.path()).unwrap();
    assert_eq!(names(&datasets), vec!["linked"]);
}

#[cfg(unix)]
#[test]
fn list_datasets_skips_dangling_symlinks() {
    let dir = tempfile::tempdir().unwrap();
    let link = dir.path().join("dangling");
    std::os::unix::fs::symlink(dir.path().join("gone"), link).unwrap();

    assert!(list_datasets(dir.path()).unwrap().is_empty());
}
