//! Integration tests for the viewer API
//!
//! These tests drive the axum router directly through tower's `oneshot`,
//! covering every route with real files in a temporary directory. No TCP
//! listener is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use inventory_processor::server::{ViewerState, create_router};
use tempfile::TempDir;
use tower::ServiceExt;

/// Build viewer state over a temp directory with the given artifacts
fn viewer_state(temp_dir: &TempDir, csv: Option<&str>, inventory_json: Option<&str>) -> ViewerState {
    let data_file = temp_dir.path().join("data.csv");
    if let Some(contents) = csv {
        std::fs::write(&data_file, contents).unwrap();
    }

    let inventory_path = temp_dir.path().join("inventory_data.json");
    if let Some(contents) = inventory_json {
        std::fs::write(&inventory_path, contents).unwrap();
    }

    ViewerState::new(&data_file, inventory_path, temp_dir.path().join("assets")).unwrap()
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_health_endpoint() {
    let temp_dir = TempDir::new().unwrap();
    let router = create_router(viewer_state(&temp_dir, None, None));

    let (status, body) = get(router, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "inventory-processor");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_api_data_serves_inferred_rows() {
    let temp_dir = TempDir::new().unwrap();
    let router = create_router(viewer_state(
        &temp_dir,
        Some("course,id,score\nIntro to MRI,1,4.5\nStats Refresher,2,\n"),
        None,
    ));

    let (status, body) = get(router, "/api/data").await;
    assert_eq!(status, StatusCode::OK);

    let rows: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["course"], serde_json::json!("Intro to MRI"));
    assert_eq!(rows[0]["id"], serde_json::json!(1));
    assert_eq!(rows[0]["score"], serde_json::json!(4.5));
    assert_eq!(rows[1]["score"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_api_data_without_table_is_empty_array() {
    let temp_dir = TempDir::new().unwrap();
    let router = create_router(viewer_state(&temp_dir, None, None));

    let (status, body) = get(router, "/api/data").await;
    assert_eq!(status, StatusCode::OK);

    let rows: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(rows, serde_json::json!([]));
}

#[tokio::test]
async fn test_api_inventory_serves_document() {
    let temp_dir = TempDir::new().unwrap();
    let document = r#"[{"id": 1, "course_name": "Intro to MRI", "notes": null}]"#;
    let router = create_router(viewer_state(&temp_dir, None, Some(document)));

    let (status, body) = get(router, "/api/inventory").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json[0]["id"], serde_json::json!(1));
    assert_eq!(json[0]["notes"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_api_inventory_missing_document() {
    let temp_dir = TempDir::new().unwrap();
    let router = create_router(viewer_state(&temp_dir, None, None));

    let (status, body) = get(router, "/api/inventory").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("not found"));
    assert!(message.contains("transcode"));
}

#[tokio::test]
async fn test_api_inventory_invalid_document() {
    let temp_dir = TempDir::new().unwrap();
    let router = create_router(viewer_state(&temp_dir, None, Some("not json {{")));

    let (status, body) = get(router, "/api/inventory").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("not valid JSON"));
}

#[tokio::test]
async fn test_index_falls_back_to_built_in_page() {
    let temp_dir = TempDir::new().unwrap();
    let router = create_router(viewer_state(&temp_dir, None, None));

    let (status, body) = get(router, "/").await;
    assert_eq!(status, StatusCode::OK);

    let page = String::from_utf8(body).unwrap();
    assert!(page.contains("Inventory Viewer"));
    assert!(page.contains("/api/data"));
}

#[tokio::test]
async fn test_index_prefers_assets_page() {
    let temp_dir = TempDir::new().unwrap();
    let assets_dir = temp_dir.path().join("assets");
    std::fs::create_dir_all(&assets_dir).unwrap();
    std::fs::write(
        assets_dir.join("index.html"),
        "<html><body>custom page</body></html>",
    )
    .unwrap();

    let router = create_router(viewer_state(&temp_dir, None, None));

    let (status, body) = get(router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("custom page"));
}

#[tokio::test]
async fn test_static_assets_served() {
    let temp_dir = TempDir::new().unwrap();
    let assets_dir = temp_dir.path().join("assets");
    std::fs::create_dir_all(&assets_dir).unwrap();
    std::fs::write(assets_dir.join("viewer.css"), "body { margin: 0; }").unwrap();

    let router = create_router(viewer_state(&temp_dir, None, None));

    let (status, body) = get(router, "/static/viewer.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "body { margin: 0; }");
}
