use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{model::api::ApiResponse, state::AppState, util::timestamp::Timestamp};

/// Collection the write and read probes work against.
const PROBE_COLLECTION: &str = "test_collection";

/// GET /api/test/health - Liveness probe
///
/// Always answers, the store flag reports whether a probe read against the
/// backend succeeded. This endpoint returns a plain JSON object rather than
/// the usual envelope.
///
/// # Returns
/// - `200 OK`: `{"status", "timestamp", "message", "firebase"}`
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let connected = state.store.health_check().await;

    Json(json!({
        "status": "UP",
        "timestamp": Timestamp::now().to_rfc3339(),
        "message": "Backend is running!",
        "firebase": if connected { "CONNECTED" } else { "DISCONNECTED" },
    }))
}

/// GET /api/test/firebase - Store write probe
///
/// Writes a throwaway document to the probe collection and reports the
/// generated ID.
///
/// # Returns
/// - `200 OK`: Envelope with the written document's coordinates
/// - `400 Bad Request`: Store write failed
pub async fn probe_store_write(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("Testing store connection");

    let document = json!({
        "message": "Hello Firebase!",
        "timestamp": Timestamp::now().to_rfc3339(),
        "status": "connected",
        "testNumber": rand::random::<f64>(),
    });

    match state.store.create_raw(PROBE_COLLECTION, document).await {
        Ok(document_id) => {
            tracing::info!("Store test successful, document ID: {document_id}");
            (
                StatusCode::OK,
                Json(ApiResponse::success_with_message(
                    json!({
                        "documentId": document_id,
                        "message": "Firebase connected successfully!",
                        "collection": PROBE_COLLECTION,
                    }),
                    "Firebase working!",
                )),
            )
        }
        Err(err) => {
            tracing::error!("Store write probe failed: {err}");
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!(
                    "Firebase connection failed: {err}"
                ))),
            )
        }
    }
}

/// GET /api/test/firebase/read - Store read probe
///
/// # Returns
/// - `200 OK`: Envelope with every document in the probe collection
/// - `400 Bad Request`: Store read failed
pub async fn probe_store_read(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("Testing store read");

    match state.store.get_all_raw(PROBE_COLLECTION).await {
        Ok(documents) => {
            let message = format!("Found {} test documents", documents.len());
            (
                StatusCode::OK,
                Json(ApiResponse::success_with_message(documents, message)),
            )
        }
        Err(err) => {
            tracing::error!("Store read probe failed: {err}");
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!("Firebase read failed: {err}"))),
            )
        }
    }
}
