use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral local port and return its base URL.
///
/// The server task lives until the test runtime shuts down.
async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind notes server.");
    let addr = listener
        .local_addr()
        .expect("Failed to read notes server address.");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}

/// Notes API answering `GET /notes` and `GET /note/{id}` from a fixed collection
pub async fn start_notes_server(notes: Vec<Value>) -> String {
    let app = Router::new()
        .route("/notes", get(list_notes))
        .route("/note/{id}", get(get_note))
        .with_state(Arc::new(notes));
    serve(app).await
}

/// Notes API that answers every request with `status`
#[allow(dead_code)]
pub async fn start_failing_server(status: StatusCode) -> String {
    let app = Router::new().fallback(move || async move { status });
    serve(app).await
}

/// Notes API whose `GET /notes` returns `body` verbatim with a 200
#[allow(dead_code)]
pub async fn start_raw_server(body: &'static str) -> String {
    let app = Router::new().route("/notes", get(move || async move { body }));
    serve(app).await
}

async fn list_notes(State(notes): State<Arc<Vec<Value>>>) -> Json<Value> {
    Json(Value::Array(notes.to_vec()))
}

async fn get_note(State(notes): State<Arc<Vec<Value>>>, Path(id): Path<String>) -> Response {
    match notes.iter().find(|note| note["id"] == id.as_str()) {
        Some(note) => Json(note.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "Note not found").into_response(),
    }
}

/// The two-note collection used throughout the query examples
#[allow(dead_code)]
pub fn sample_notes() -> Vec<Value> {
    vec![
        json!({
            "id": "1",
            "content": "# Hi",
            "metadata": {"title": "Hello", "tags": ["a", "b"], "updated": "2024-01-01T00:00:00Z"}
        }),
        json!({
            "id": "2",
            "content": "bye",
            "metadata": {"tags": ["b"], "series": {"name": "farewells", "part": 2}}
        }),
    ]
}
