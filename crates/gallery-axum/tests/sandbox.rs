//! Path parameters can never reach outside the galleries root.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{TestApp, png};

#[tokio::test]
async fn dot_dot_gallery_is_rejected_before_any_mutation() {
    let app = TestApp::new();
    std::fs::write(app.outside().join("keep.txt"), b"keep").unwrap();

    let (status, _) = app.delete_json("/gallery/%2E%2E").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.delete_json("/gallery/%2E%2E/keep.txt").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(app.root().is_dir());
    assert!(app.outside().join("keep.txt").exists());
}

#[tokio::test]
async fn encoded_separators_are_rejected() {
    let app = TestApp::new();
    app.create_gallery(&json!({ "name": "pets" })).await;

    let (status, _) = app.get_json("/gallery/pets%2F..").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get_json("/images/10x10/pets/..%2F..%2Fkeep.txt").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_file_name_cannot_escape_the_gallery() {
    let app = TestApp::new();
    app.create_gallery(&json!({ "name": "pets" })).await;

    let (status, _) = app
        .upload("/gallery/pets", "name", "../evil.png", &png(4, 4))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!app.root().join("evil.png").exists());
    assert_eq!(std::fs::read_dir(app.root().join("pets")).unwrap().count(), 0);
}

#[cfg(unix)]
#[tokio::test]
async fn symlinked_gallery_outside_root_is_refused() {
    let app = TestApp::new();
    let outside = app.outside().join("elsewhere");
    std::fs::create_dir(&outside).unwrap();
    std::fs::write(outside.join("cat.png"), png(4, 4)).unwrap();
    std::os::unix::fs::symlink(&outside, app.root().join("link")).unwrap();

    let (status, _) = app.delete_json("/gallery/link/cat.png").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(outside.join("cat.png").exists());
}
