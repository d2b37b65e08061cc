//! Integration tests for schema collection
//!
//! Exercise full passes over temporary source trees: naming, deduplication,
//! idempotence and the handling of a destination nested in the search root.

use schema_collector::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn dir_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    entries.sort();
    entries
}

/// Same base name, different content: both survive under distinct names
#[test]
fn test_same_name_different_content() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    let out = temp_dir.path().join("out");
    write(&root.join("a/user.graphqls"), "type User { id: ID! }");
    write(&root.join("b/user.graphqls"), "type User { name: String }");

    let copied = collect_schemas(&root, &out).unwrap();

    let hash_x = ContentHash::from_bytes(b"type User { id: ID! }");
    let hash_y = ContentHash::from_bytes(b"type User { name: String }");
    assert_eq!(
        copied,
        vec![
            out.join(format!("user_{}.graphqls", hash_x.short())),
            out.join(format!("user_{}.graphqls", hash_y.short())),
        ]
    );
    assert_eq!(dir_entries(&out).len(), 2);
    assert_eq!(
        fs::read_to_string(&copied[1]).unwrap(),
        "type User { name: String }"
    );
}

/// A second run over an unchanged tree copies nothing
#[test]
fn test_second_run_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    let out = temp_dir.path().join("out");
    write(&root.join("query.graphqls"), "type Query { ping: String }");
    write(&root.join("nested/mutation.graphqls"), "type Mutation { pong: String }");

    let first = collect_schemas(&root, &out).unwrap();
    assert_eq!(first.len(), 2);

    let second = collect_schemas(&root, &out).unwrap();
    assert!(second.is_empty(), "Second run should copy nothing");
    assert_eq!(dir_entries(&out), {
        let mut sorted = first.clone();
        sorted.sort();
        sorted
    });
}

/// A changed source is collected again under a new name, the old copy stays
#[test]
fn test_changed_content_adds_new_version() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    let out = temp_dir.path().join("out");
    write(&root.join("user.graphqls"), "v1");
    let first = collect_schemas(&root, &out).unwrap();

    write(&root.join("user.graphqls"), "v2");
    let second = collect_schemas(&root, &out).unwrap();

    assert_eq!(second.len(), 1);
    assert_ne!(first, second);
    assert_eq!(fs::read_to_string(&first[0]).unwrap(), "v1");
    assert_eq!(fs::read_to_string(&second[0]).unwrap(), "v2");
}

/// A source already named after its own hash is copied under that name
#[test]
fn test_already_tagged_source_is_not_tagged_twice() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    let out = temp_dir.path().join("out");
    let content = "schema { query: Query }";
    let short = ContentHash::from_bytes(content.as_bytes()).short().to_string();
    write(&root.join(format!("schema_{}.graphqls", short)), content);

    let copied = collect_schemas(&root, &out).unwrap();

    assert_eq!(copied, vec![out.join(format!("schema_{}.graphqls", short))]);
}

/// Files already in a destination nested under the root are not re-copied
#[test]
fn test_destination_inside_search_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    let out = root.join("collected");
    write(&root.join("user.graphqls"), "type User");

    let first = collect_schemas(&root, &out).unwrap();
    assert_eq!(first.len(), 1);

    let second = collect_schemas(&root, &out).unwrap();
    assert!(second.is_empty());
    assert_eq!(dir_entries(&out), first);
}

/// A hand-placed, untagged schema inside the destination is never picked up
#[test]
fn test_destination_contents_are_never_sources() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    let out = root.join("collected");
    write(&out.join("stray.graphqls"), "type Stray");

    let copied = collect_schemas(&root, &out).unwrap();

    assert!(copied.is_empty());
    assert_eq!(dir_entries(&out), vec![out.join("stray.graphqls")]);
}

/// Only files ending in `.graphqls` are collected
#[test]
fn test_suffix_filtering() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    let out = temp_dir.path().join("out");
    write(&root.join("schema.graphql"), "type Query");
    write(&root.join("schema.json"), "{}");
    write(&root.join("README.md"), "# graph");

    let copied = collect_schemas(&root, &out).unwrap();

    assert!(copied.is_empty());
}

/// A tree without schemas yields an empty, but created, destination
#[test]
fn test_empty_tree_creates_empty_destination() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    fs::create_dir_all(root.join("empty/subdir")).unwrap();
    let out = temp_dir.path().join("build/schemas/out");

    let copied = collect_schemas(&root, &out).unwrap();

    assert!(copied.is_empty());
    assert!(out.is_dir());
    assert!(dir_entries(&out).is_empty());
}

/// Skipped sources are reported alongside the copied ones
#[test]
fn test_outcome_lists_skipped_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    let out = temp_dir.path().join("out");
    write(&root.join("a/user.graphqls"), "type User");
    write(&root.join("b/user.graphqls"), "type User");
    write(&root.join("c/order.graphqls"), "type Order");

    let collector = SchemaCollector::new(CollectorConfig::new(&root, &out));
    let outcome = collector.collect().unwrap();

    assert_eq!(outcome.copied.len(), 2);
    assert_eq!(outcome.skipped.len(), 1);
    assert!(outcome.skipped[0].source.ends_with("b/user.graphqls"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_source_aborts_pass() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    let out = temp_dir.path().join("out");
    let locked = root.join("locked.graphqls");
    write(&locked, "type Locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores file permissions
    if fs::read(&locked).is_ok() {
        return;
    }

    let result = collect_schemas(&root, &out);
    assert!(matches!(result, Err(CollectError::Read { .. })));
}

/// A symlinked schema is collected with the content of its target
#[cfg(unix)]
#[test]
fn test_symlinked_schema_is_collected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    let out = temp_dir.path().join("out");
    let shared = temp_dir.path().join("shared/user.graphqls");
    write(&shared, "type User");
    fs::create_dir_all(&root).unwrap();
    std::os::unix::fs::symlink(&shared, root.join("user.graphqls")).unwrap();

    let copied = collect_schemas(&root, &out).unwrap();

    let short = ContentHash::from_bytes(b"type User").short().to_string();
    assert_eq!(copied, vec![out.join(format!("user_{}.graphqls", short))]);
    assert_eq!(fs::read_to_string(&copied[0]).unwrap(), "type User");
    assert!(!fs::symlink_metadata(&copied[0]).unwrap().file_type().is_symlink());
}

/// Using the search root as destination still collects nested schemas
#[test]
fn test_destination_is_search_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    write(&root.join("a/user.graphqls"), "type User");

    let first = collect_schemas(&root, &root).unwrap();
    let short = ContentHash::from_bytes(b"type User").short().to_string();
    assert_eq!(first, vec![root.join(format!("user_{}.graphqls", short))]);

    // The copy sits directly in the root and is not picked up again
    let second = collect_schemas(&root, &root).unwrap();
    assert!(second.is_empty());
}

/// An unreadable directory mid-walk aborts the pass with a traversal error
#[cfg(unix)]
#[test]
fn test_unreadable_directory_aborts_pass() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("graph");
    let out = temp_dir.path().join("out");
    write(&root.join("a/first.graphqls"), "type First");
    let locked = root.join("b");
    fs::create_dir_all(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores directory permissions
    if fs::read_dir(&locked).is_ok() {
        return;
    }

    let result = collect_schemas(&root, &out);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(matches!(result, Err(CollectError::Walk(_))));
    // Files copied before the failure stay on disk
    assert_eq!(dir_entries(&out).len(), 1);
}
