use crate::application::add_comment::dto::AddCommentRequest;
use crate::presentation::http::{
    errors::AppError, middleware::user::decode_required_user_claims, state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use serde_json::{Value, json};

pub async fn add_comment(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.access_token_key)?;
    let Json(payload) = payload?;

    let request = AddCommentRequest {
        owner: claims.id,
        thread_id,
        parent_comment_id: None,
    };
    let added = state.add_comment.execute(request, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "addedComment": added } })),
    ))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.access_token_key)?;
    state
        .delete_comment
        .execute(&comment_id, &claims.id, &thread_id)
        .await?;
    Ok(Json(json!({ "status": "success" })))
}

pub async fn add_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.access_token_key)?;
    let Json(payload) = payload?;

    let request = AddCommentRequest {
        owner: claims.id,
        thread_id,
        parent_comment_id: Some(comment_id),
    };
    let added = state.add_comment.execute(request, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "addedReply": added } })),
    ))
}

/// Replies are comments; deleting one goes through the same ownership check.
pub async fn delete_reply(
    State(state): State<AppState>,
    Path((thread_id, _comment_id, reply_id)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.access_token_key)?;
    state
        .delete_comment
        .execute(&reply_id, &claims.id, &thread_id)
        .await?;
    Ok(Json(json!({ "status": "success" })))
}
