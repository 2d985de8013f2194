use crate::presentation::http::{
    errors::AppError, middleware::user::decode_required_user_claims, state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use serde_json::{Value, json};

pub async fn create_thread(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.access_token_key)?;
    let Json(payload) = payload?;

    let added = state.add_thread.execute(&claims.id, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "addedThread": added } })),
    ))
}

pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let thread = state.get_thread_detail.execute(&thread_id).await?;
    Ok(Json(
        json!({ "status": "success", "data": { "thread": thread } }),
    ))
}
