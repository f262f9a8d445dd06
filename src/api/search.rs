use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::api::AppState;

#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

pub async fn search(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> impl IntoResponse {
    let query = payload.query.trim();
    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "query must not be empty" })),
        )
            .into_response();
    }

    tracing::info!("processing search query: '{}'", query);
    let response = state.discovery.process_query(query).await;
    Json(response).into_response()
}
