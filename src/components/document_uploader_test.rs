#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn preview_is_empty_without_files() {
    assert_eq!(preview_file(&[]), None);
}

#[test]
fn preview_shows_only_the_first_file() {
    let files = vec![
        UploadedFile::new("passport.png", "image/png", 2048.0),
        UploadedFile::new("extra.jpg", "image/jpeg", 1024.0),
    ];
    let shown = preview_file(&files).expect("preview present");
    assert_eq!(shown.file_name, "passport.png");
}

#[test]
fn an_empty_selection_clears_the_preview() {
    // The callback fires on every drop/selection, even one that accepted
    // nothing, so the call site overwrites a previous file with the empty
    // list and the preview goes away instead of going stale.
    let before = vec![UploadedFile::new("passport.png", "image/png", 2048.0)];
    let after: Vec<UploadedFile> = Vec::new();

    assert!(preview_file(&before).is_some());
    assert_eq!(preview_file(&after), None);
}

#[test]
fn a_new_selection_replaces_the_previewed_file() {
    // The call site overwrites its list on every callback, so the preview
    // follows the latest selection rather than appending.
    let first = vec![UploadedFile::new("passport.png", "image/png", 2048.0)];
    let second = vec![UploadedFile::new("license.jpg", "image/jpeg", 512.0)];

    assert_eq!(preview_file(&first).map(|f| f.file_name.as_str()), Some("passport.png"));
    assert_eq!(preview_file(&second).map(|f| f.file_name.as_str()), Some("license.jpg"));
    assert_eq!(second.len(), 1);
}
