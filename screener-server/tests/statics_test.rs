//! Static serving: entry file at `/`, nested bundle assets, 404 on
//! missing files and traversal attempts.

mod common;

use axum::body::to_bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use common::StubClassifier;
use screener_server::statics::{asset, index};

#[tokio::test]
async fn index_html_is_served_at_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>simon says</html>").unwrap();
    let state = common::state_in(dir.path(), StubClassifier::returning(0));

    let resp = index(State(state)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"<html>simon says</html>");
}

#[tokio::test]
async fn missing_index_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let state = common::state_in(dir.path(), StubClassifier::returning(0));

    let resp = index(State(state)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn nested_bundle_asset_is_served_with_content_type() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("Build")).unwrap();
    std::fs::write(dir.path().join("Build/game.wasm"), b"\0asm").unwrap();
    let state = common::state_in(dir.path(), StubClassifier::returning(0));

    let resp = asset(State(state), Path("Build/game.wasm".to_string())).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/wasm"
    );
}

#[tokio::test]
async fn traversal_outside_static_dir_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let state = common::state_in(dir.path(), StubClassifier::returning(0));

    let resp = asset(State(state), Path("../secrets.txt".to_string())).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_asset_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let state = common::state_in(dir.path(), StubClassifier::returning(0));

    let resp = asset(State(state), Path("missing.js".to_string())).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
