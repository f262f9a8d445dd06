use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::api::AppState;
use crate::discovery::models::CardKind;

/// Descriptive record for the semantic search capability that is not built
/// yet. Purely informational, no behavior behind it.
pub async fn semantic_search_feature(State(state): State<AppState>) -> Json<Value> {
    let feature = state.discovery.placeholder_feature();
    Json(json!(feature))
}

/// Per-kind rendering hints so clients don't hardcode icons and colors.
pub async fn card_styles() -> Json<Value> {
    let styles: serde_json::Map<String, Value> = CardKind::ALL
        .iter()
        .map(|kind| (kind.as_str().to_string(), json!(kind.style())))
        .collect();
    Json(Value::Object(styles))
}
