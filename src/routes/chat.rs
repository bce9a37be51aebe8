use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::chat::{ChatReply, ChatRequest},
    error::AppResult,
    extract::AppJson,
    response::ApiResponse,
    services::chat_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply grounded in the restaurant catalog", body = ApiResponse<ChatReply>),
        (status = 400, description = "Empty message"),
        (status = 500, description = "Completion service failure")
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ChatRequest>,
) -> AppResult<Json<ApiResponse<ChatReply>>> {
    let resp = chat_service::chat(&state, payload).await?;
    Ok(Json(resp))
}
