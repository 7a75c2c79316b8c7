//! End-to-end tests for secret file persistence.

use ssb_keys::{extract_tag, load, load_or_create, Keys, KeysError};

#[test]
fn test_load_or_create_creates_then_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("secret");
    assert!(!path.exists());

    let first = load_or_create(Some(&path)).unwrap();
    assert!(path.exists(), "secret file was created at the given path");

    let second = load_or_create(Some(&path)).unwrap();
    assert_eq!(
        first.private_key_bytes(),
        second.private_key_bytes(),
        "keys were loaded from the secret file, not regenerated"
    );
    assert_eq!(first, second);
}

#[test]
fn test_secret_file_is_comment_wrapped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("secret");

    let keys = load_or_create(Some(&path)).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    // Warning banner, JSON body, trailing public name comment.
    assert!(content.starts_with("# WARNING: Never show this to anyone.\n"));
    assert!(content.contains("\"curve\": \"ed25519\""));
    assert!(content.contains(&format!("\"id\": \"{}\"", keys.id())));
    assert!(content.trim_end().ends_with(&format!("#   \"{}\"", keys.id())));

    // Every non-JSON line is a comment.
    let mut in_json = false;
    for line in content.lines() {
        if line.starts_with('{') {
            in_json = true;
        }
        if !in_json {
            assert!(line.starts_with('#'), "non-JSON line is a comment: {line:?}");
        }
        if line.starts_with('}') {
            in_json = false;
        }
    }
}

#[test]
fn test_load_file_written_by_another_implementation() {
    // A secret file as another implementation of the protocol would write
    // it: different field order, no pretty-printing, extra commentary.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("secret");

    let expected = Keys::from_seed(b"Z!6iT@z@g8U3y8CgpqM2yAuKc_ki!*Z8").unwrap();
    let content = format!(
        "# this file belongs to someone else's client\n\
         {{\"id\":\"{}\",\"curve\":\"ed25519\",\"private\":\"{}\",\"public\":\"{}\"}}\n\
         # end of secret\n",
        expected.id(),
        expected.private_key_string(),
        expected.public_key_string(),
    );
    std::fs::write(&path, content).unwrap();

    let loaded = load_or_create(Some(&path)).unwrap();
    assert_eq!(loaded, expected);
    assert_eq!(extract_tag(&loaded.id()), "ed25519");
}

#[test]
fn test_load_or_create_corrupt_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("secret");
    std::fs::write(&path, "# a file with comments but no credentials\n").unwrap();

    let result = load_or_create(Some(&path));
    assert!(matches!(result, Err(KeysError::CorruptSecretFile(_))));
}

#[test]
fn test_load_or_create_never_rewrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("secret");

    load_or_create(Some(&path)).unwrap();
    let before = std::fs::read(&path).unwrap();
    let mtime_before = std::fs::metadata(&path).unwrap().modified().unwrap();

    load_or_create(Some(&path)).unwrap();
    let after = std::fs::read(&path).unwrap();
    let mtime_after = std::fs::metadata(&path).unwrap().modified().unwrap();

    assert_eq!(before, after, "file content untouched by a load");
    assert_eq!(mtime_before, mtime_after);
}

#[test]
fn test_distinct_paths_get_distinct_identities() {
    let dir = tempfile::tempdir().unwrap();
    let a = load_or_create(Some(&dir.path().join("a"))).unwrap();
    let b = load_or_create(Some(&dir.path().join("b"))).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_load_explicitly_after_create() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(".ssb").join("secret");

    let created = load_or_create(Some(&path)).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(created, loaded);
}
