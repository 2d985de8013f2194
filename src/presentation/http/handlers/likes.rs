use crate::presentation::http::{
    errors::AppError, middleware::user::decode_required_user_claims, state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use serde_json::{Value, json};

pub async fn toggle_like(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.access_token_key)?;
    let like_state = state
        .toggle_like
        .execute(&claims.id, &comment_id, &thread_id)
        .await?;
    tracing::debug!(?like_state, "like toggled");
    Ok(Json(json!({ "status": "success" })))
}
