//! End-to-end scanner tests.
//!
//! These run the real `jwalk` walk over temporary directory trees and feed
//! the results through both aggregation passes, so exclusion pruning,
//! filters, and report totals are checked against an actual filesystem.
use repo_tidier_core::{
    count_types, scan, scan_with_observer, summarize, FileRecord, ScanConfig, ScanError,
    ScanEvent, SortKey,
};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![b'x'; n]).unwrap();
}

/// Build a small repository-like tree:
///
/// ```text
/// root/
///   file1.txt        (7 bytes)
///   file2.py         (14 bytes)
///   large_file.txt   (1 000 bytes)
///   subdir/
///     file3.js       (19 bytes)
///   .git/config      (excluded by default)
///   __pycache__/file.pyc  (excluded by default)
/// ```
fn build_repo_tree(root: &Path) {
    write_bytes(&root.join("file1.txt"), 7);
    write_bytes(&root.join("file2.py"), 14);
    write_bytes(&root.join("large_file.txt"), 1_000);
    write_bytes(&root.join("subdir").join("file3.js"), 19);
    write_bytes(&root.join(".git").join("config"), 10);
    write_bytes(&root.join("__pycache__").join("file.pyc"), 8);
}

fn paths(records: &[FileRecord]) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = records.iter().map(|r| r.relative_path.clone()).collect();
    out.sort();
    out
}

// ── Scanner ──────────────────────────────────────────────────────────────────

#[test]
fn scan_finds_files_and_dirs_but_not_default_excludes() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_repo_tree(tmp.path());

    let records = scan(&ScanConfig::new(tmp.path())).unwrap();

    assert_eq!(
        paths(&records),
        vec![
            PathBuf::from("file1.txt"),
            PathBuf::from("file2.py"),
            PathBuf::from("large_file.txt"),
            PathBuf::from("subdir"),
            PathBuf::from("subdir").join("file3.js"),
        ]
    );
    let subdir = records.iter().find(|r| r.is_directory).unwrap();
    assert_eq!(subdir.size_bytes, 0);
}

#[test]
fn scan_empty_directory() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let records = scan(&ScanConfig::new(tmp.path())).unwrap();
    assert!(records.is_empty());
}

#[test]
fn scan_nonexistent_path_fails() {
    let err = scan(&ScanConfig::new("/nonexistent/path/12345")).unwrap_err();
    assert!(matches!(err, ScanError::NotFound(_)));
}

#[test]
fn scan_file_root_fails() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("test.txt");
    write_bytes(&file, 7);

    let err = scan(&ScanConfig::new(&file)).unwrap_err();
    assert!(matches!(err, ScanError::NotADirectory(_)));
}

/// Excluding `dir_a` must drop everything under it.
#[test]
fn exclude_prunes_whole_subtree() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("dir_a").join("x.txt"), 4);
    write_bytes(&tmp.path().join("dir_a").join("deep").join("z.txt"), 4);
    write_bytes(&tmp.path().join("dir_b").join("y.txt"), 4);

    let config = ScanConfig::new(tmp.path()).exclude(["dir_a"]).files_only(true);
    let records = scan(&config).unwrap();

    assert_eq!(paths(&records), vec![PathBuf::from("dir_b").join("y.txt")]);
}

/// User exclusions add to the defaults instead of replacing them.
#[test]
fn user_excludes_keep_defaults() {
    let tmp = TempDir::new().unwrap();
    build_repo_tree(tmp.path());
    write_bytes(&tmp.path().join("node_modules").join("package.json"), 2);
    write_bytes(&tmp.path().join("dist").join("bundle.js"), 2);

    let config = ScanConfig::new(tmp.path()).exclude(["dist"]);
    let records = scan(&config).unwrap();

    for record in &records {
        let path = record.relative_path.to_string_lossy();
        assert!(!path.contains(".git"), "{path} should be excluded");
        assert!(!path.contains("__pycache__"), "{path} should be excluded");
        assert!(!path.contains("node_modules"), "{path} should be excluded");
        assert!(!path.contains("dist"), "{path} should be excluded");
    }
}

#[test]
fn extension_filter_keeps_matching_files() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("a.py"), 10);
    write_bytes(&tmp.path().join("b.txt"), 5);
    write_bytes(&tmp.path().join("c"), 3);

    let config = ScanConfig::new(tmp.path()).extensions([".py"]);
    let records = scan(&config).unwrap();
    let report = summarize(&records, SortKey::Size, true, None);

    assert_eq!(paths(&records), vec![PathBuf::from("a.py")]);
    assert_eq!(report.total_size_bytes, 10);
}

#[test]
fn extension_filter_is_case_insensitive() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("Upper.PY"), 3);
    write_bytes(&tmp.path().join("lower.py"), 3);

    let records = scan(&ScanConfig::new(tmp.path()).extensions(["py"])).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn extension_filter_without_matches_is_empty() {
    let tmp = TempDir::new().unwrap();
    build_repo_tree(tmp.path());

    let config = ScanConfig::new(tmp.path())
        .extensions([".nonexistent"])
        .files_only(true);
    assert!(scan(&config).unwrap().is_empty());
}

#[test]
fn files_only_drops_directories_from_totals() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("empty")).unwrap();
    write_bytes(&tmp.path().join("only.txt"), 12);

    let all = scan(&ScanConfig::new(tmp.path())).unwrap();
    let files = scan(&ScanConfig::new(tmp.path()).files_only(true)).unwrap();
    let with_dirs = summarize(&all, SortKey::Size, true, None);
    let files_only = summarize(&files, SortKey::Size, true, None);

    assert_eq!(with_dirs.total_files, 2);
    assert_eq!(files_only.total_files, 1);
    assert_eq!(files_only.total_size_bytes, 12);
}

#[test]
fn observer_receives_completion() {
    let tmp = TempDir::new().unwrap();
    build_repo_tree(tmp.path());

    let mut events = Vec::new();
    let records = scan_with_observer(&ScanConfig::new(tmp.path()), |e| events.push(e)).unwrap();

    match events.last() {
        Some(ScanEvent::Complete {
            records: count,
            skipped,
            dirs_visited,
            ..
        }) => {
            assert_eq!(*count, records.len());
            assert_eq!(*skipped, 0);
            // Root + subdir; pruned directories are never visited.
            assert_eq!(*dirs_visited, 2);
        }
        other => panic!("expected Complete as the last event, got {other:?}"),
    }
    assert!(!events.iter().any(ScanEvent::is_skip));
}

/// An unreadable subdirectory must not abort the scan. When running as root
/// the directory stays readable, so only the survival of its sibling is
/// asserted unconditionally.
#[cfg(unix)]
#[test]
fn unreadable_subdirectory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("locked").join("secret.txt"), 5);
    write_bytes(&tmp.path().join("open.txt"), 5);
    let locked = tmp.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let mut skips = 0;
    let result = scan_with_observer(&ScanConfig::new(tmp.path()).files_only(true), |e| {
        if e.is_skip() {
            skips += 1;
        }
    });

    // Restore so TempDir can clean up.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let records = result.expect("permission errors must not be fatal");
    assert!(records.iter().any(|r| r.relative_path == Path::new("open.txt")));
    if !records.iter().any(|r| r.name() == "secret.txt") {
        assert!(skips >= 1, "a hidden subtree must be reported as skipped");
    }
}

/// A link is sized by its target; a dangling link is skipped, not kept.
#[cfg(unix)]
#[test]
fn symlinks_use_target_size_and_dangling_links_are_skipped() {
    use std::os::unix::fs::symlink;

    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("big.bin"), 5_000);
    symlink(tmp.path().join("big.bin"), tmp.path().join("link.bin")).unwrap();
    symlink(tmp.path().join("missing"), tmp.path().join("dangling")).unwrap();

    let mut skipped = Vec::new();
    let records = scan_with_observer(&ScanConfig::new(tmp.path()), |e| {
        if let ScanEvent::Skipped { path, .. } = e {
            skipped.push(path);
        }
    })
    .unwrap();

    assert_eq!(
        paths(&records),
        vec![PathBuf::from("big.bin"), PathBuf::from("link.bin")]
    );
    assert!(records.iter().all(|r| r.size_bytes == 5_000));
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0].ends_with("dangling"));
}

/// A link to a directory is listed as a directory but never descended into.
#[cfg(unix)]
#[test]
fn directory_symlinks_are_not_followed() {
    use std::os::unix::fs::symlink;

    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("real").join("inner.txt"), 4);
    symlink(tmp.path().join("real"), tmp.path().join("alias")).unwrap();

    let records = scan(&ScanConfig::new(tmp.path())).unwrap();

    assert_eq!(
        paths(&records),
        vec![
            PathBuf::from("alias"),
            PathBuf::from("real"),
            PathBuf::from("real").join("inner.txt"),
        ]
    );
    let alias = records.iter().find(|r| r.name() == "alias").unwrap();
    assert!(alias.is_directory);
    assert_eq!(alias.size_bytes, 0);
}

// ── Aggregation over real scans ──────────────────────────────────────────────

#[test]
fn summary_over_repo_tree() {
    let tmp = TempDir::new().unwrap();
    build_repo_tree(tmp.path());

    let records = scan(&ScanConfig::new(tmp.path()).files_only(true)).unwrap();
    let report = summarize(&records, SortKey::Size, true, Some(2));

    assert_eq!(report.total_files, 4);
    assert_eq!(report.total_size_bytes, 7 + 14 + 1_000 + 19);
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.largest.as_ref().unwrap().name(), "large_file.txt");
    assert_eq!(report.smallest.as_ref().unwrap().name(), "file1.txt");
    assert_eq!(report.entries[0].name(), "large_file.txt");
    let sizes: Vec<u64> = report.entries.iter().map(|r| r.size_bytes).collect();
    assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn type_counts_over_repo_tree() {
    let tmp = TempDir::new().unwrap();
    build_repo_tree(tmp.path());
    write_bytes(&tmp.path().join("subdir").join("extra.py"), 1);

    let records = scan(&ScanConfig::new(tmp.path()).files_only(true)).unwrap();
    let report = count_types(&records, Some(1), false);

    assert_eq!(report.total_unique_types, 3);
    assert_eq!(report.counts.len(), 1);
    // .py and .txt both have two files; the tie goes to the smaller name.
    assert_eq!(report.counts[0].extension, ".py");
    assert_eq!(report.counts[0].count, 2);
}

/// Two scans of an unmodified tree give identical reports.
#[test]
fn repeated_scans_are_identical() {
    let tmp = TempDir::new().unwrap();
    build_repo_tree(tmp.path());
    let config = ScanConfig::new(tmp.path());

    let first = scan(&config).unwrap();
    let second = scan(&config).unwrap();

    assert_eq!(
        summarize(&first, SortKey::Name, false, None),
        summarize(&second, SortKey::Name, false, None)
    );
    assert_eq!(count_types(&first, None, false), count_types(&second, None, false));
}

#[test]
fn reports_serialise_to_json() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("a.py"), 10);

    let records = scan(&ScanConfig::new(tmp.path())).unwrap();
    let json = serde_json::to_value(summarize(&records, SortKey::Size, true, None)).unwrap();

    assert_eq!(json["total_files"], 1);
    assert_eq!(json["total_size_bytes"], 10);
    assert_eq!(json["largest"]["extension"], ".py");
    assert_eq!(json["entries"][0]["relative_path"], "a.py");
}
