//! Built-in viewer API for generated record sets
//!
//! A thin HTTP layer over the pipeline's outputs: the transcoded inventory
//! document, an optional CSV table for ad-hoc viewing, and a static landing
//! page. The CSV table is loaded once at startup; the inventory document is
//! read from disk on every request so a fresh `convert` + `transcode` shows
//! up without a restart.

use crate::config::ServerConfig;
use crate::{Error, Result};
use axum::{
    Router,
    extract::Extension,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
};
use hyper::Server;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Built-in landing page used when the assets directory has no index.html
const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Inventory Viewer</title>
    <style>
      body { font-family: sans-serif; margin: 2rem; }
      table { border-collapse: collapse; }
      th, td { border: 1px solid #ccc; padding: 4px 8px; text-align: left; }
      th { background: #f0f0f0; }
      .error { color: #b00020; }
    </style>
  </head>
  <body>
    <h1>Inventory Viewer</h1>
    <div id="content">Loading&hellip;</div>
    <script>
      fetch('/api/data')
        .then(function (response) { return response.json(); })
        .then(function (rows) {
          var content = document.getElementById('content');
          if (!rows.length) {
            content.textContent = 'No rows in the data table.';
            return;
          }
          var keys = Object.keys(rows[0]);
          var table = document.createElement('table');
          var header = table.insertRow();
          keys.forEach(function (key) {
            var th = document.createElement('th');
            th.textContent = key;
            header.appendChild(th);
          });
          rows.forEach(function (row) {
            var tr = table.insertRow();
            keys.forEach(function (key) {
              var value = row[key];
              tr.insertCell().textContent = value === null ? '' : String(value);
            });
          });
          content.replaceChildren(table);
        })
        .catch(function (err) {
          var content = document.getElementById('content');
          content.className = 'error';
          content.textContent = 'Failed to load data: ' + err;
        });
    </script>
  </body>
</html>"#;

/// Shared state for the viewer handlers
#[derive(Debug, Clone)]
pub struct ViewerState {
    /// Rows of the CSV table, one JSON object per row
    data_rows: Vec<serde_json::Value>,
    /// Path of the transcoded inventory document, read per request
    inventory_path: PathBuf,
    /// Directory holding index.html and static assets
    assets_dir: PathBuf,
}

impl ViewerState {
    /// Build viewer state, loading the CSV table eagerly
    ///
    /// A missing table is tolerated with a warning so the document endpoints
    /// stay usable before any table exists. Restart the server to pick up a
    /// new table.
    pub fn new(
        data_file: &Path,
        inventory_path: impl Into<PathBuf>,
        assets_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let data_rows = if data_file.exists() {
            let rows = load_csv_table(data_file)?;
            info!("Loaded {} data rows from {}", rows.len(), data_file.display());
            rows
        } else {
            warn!(
                "Data table {} not found; /api/data serves an empty array",
                data_file.display()
            );
            Vec::new()
        };

        Ok(Self {
            data_rows,
            inventory_path: inventory_path.into(),
            assets_dir: assets_dir.into(),
        })
    }

    /// Number of rows loaded from the CSV table
    pub fn row_count(&self) -> usize {
        self.data_rows.len()
    }
}

/// Load a CSV table into JSON row objects
///
/// Cell inference is scalar-only: empty cells become null, integers and
/// floats parse to numbers, everything else stays a string. Short rows pad
/// with nulls; surplus cells beyond the header are dropped.
pub fn load_csv_table(path: &Path) -> Result<Vec<serde_json::Value>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            Error::sheet_parsing(
                format!("Failed to read data table {}", path.display()),
                Some(e),
            )
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::sheet_parsing("Failed to read data table header", Some(e)))?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let row =
            result.map_err(|e| Error::sheet_parsing("Failed to read data table row", Some(e)))?;

        let mut object = serde_json::Map::new();
        for (index, header) in headers.iter().enumerate() {
            let cell = row.get(index).unwrap_or("").trim();
            object.insert(header.clone(), infer_scalar(cell));
        }
        rows.push(serde_json::Value::Object(object));
    }

    Ok(rows)
}

/// Infer the JSON scalar for one table cell
fn infer_scalar(cell: &str) -> serde_json::Value {
    if cell.is_empty() {
        return serde_json::Value::Null;
    }
    if let Ok(integer) = cell.parse::<i64>() {
        return serde_json::Value::Number(integer.into());
    }
    if let Ok(float) = cell.parse::<f64>() {
        // Non-finite floats have no JSON representation and stay text
        if let Some(number) = serde_json::Number::from_f64(float) {
            return serde_json::Value::Number(number);
        }
    }
    serde_json::Value::String(cell.to_string())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "inventory-processor",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// CSV table rows loaded at startup
async fn api_data(Extension(state): Extension<Arc<ViewerState>>) -> impl IntoResponse {
    Json(serde_json::Value::Array(state.data_rows.clone()))
}

/// Transcoded inventory document, read fresh on every request
async fn api_inventory(
    Extension(state): Extension<Arc<ViewerState>>,
) -> axum::response::Response {
    let contents = match tokio::fs::read_to_string(&state.inventory_path).await {
        Ok(contents) => contents,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "error": format!(
                        "inventory document not found at {}; run convert and transcode first",
                        state.inventory_path.display()
                    )
                })),
            )
                .into_response();
        }
    };

    match serde_json::from_str::<serde_json::Value>(&contents) {
        Ok(document) => Json(document).into_response(),
        Err(e) => {
            warn!("Inventory document is not valid JSON: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": format!("inventory document is not valid JSON: {}", e)
                })),
            )
                .into_response()
        }
    }
}

/// Viewer landing page
async fn index(Extension(state): Extension<Arc<ViewerState>>) -> impl IntoResponse {
    let index_path = state.assets_dir.join("index.html");
    match tokio::fs::read_to_string(&index_path).await {
        Ok(page) => Html(page),
        Err(_) => Html(FALLBACK_INDEX.to_string()),
    }
}

/// Create the viewer router with all routes
pub fn create_router(state: ViewerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let assets_dir = state.assets_dir.clone();
    let state = Arc::new(state);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/data", get(api_data))
        .route("/api/inventory", get(api_inventory))
        // Serve local assets (viewer page, scripts, styles)
        .nest_service("/static", ServeDir::new(assets_dir))
        .layer(Extension(state))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the viewer server on the configured bind address
pub async fn start_server(config: &ServerConfig, inventory_path: PathBuf) -> Result<()> {
    let state = ViewerState::new(
        &config.data_file,
        inventory_path,
        config.assets_dir.clone(),
    )?;
    let app = create_router(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = bind_address
        .parse()
        .map_err(|e| Error::server(format!("Invalid bind address {}: {}", bind_address, e)))?;

    println!("🚀 Viewer running on http://{addr}");
    println!("💚 Health check: http://{addr}/health");
    println!("📄 Inventory:    http://{addr}/api/inventory");
    println!("📊 Data table:   http://{addr}/api/data");

    Server::try_bind(&addr)
        .map_err(|e| Error::server(format!("Failed to bind {}: {}", addr, e)))?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::server(format!("Server error: {}", e)))?;

    info!("Viewer server stopped");
    Ok(())
}

/// Resolve when ctrl_c arrives so hyper can drain in-flight requests
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => {
            warn!("Failed to install CTRL+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
