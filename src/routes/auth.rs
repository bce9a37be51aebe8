use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::auth::LoginRequest,
    error::AppResult,
    extract::AppJson,
    models::User,
    response::ApiResponse,
    services::auth_service::login_user,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login user", body = ApiResponse<User>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = login_user(&state, payload).await?;
    Ok(Json(resp))
}
