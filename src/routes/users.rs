use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::{
        auth::RegisterRequest,
        favorites::{AddFavoriteRequest, FavoriteRestaurantList},
    },
    error::AppResult,
    extract::AppJson,
    models::{Favorite, User},
    response::ApiResponse,
    services::{auth_service, favorite_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(register))
        .route("/{id}", get(get_user))
        .route("/{id}/favorites", get(list_favorites).post(add_favorite))
}

#[utoipa::path(
    post,
    path = "/users/",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Register user", body = ApiResponse<User>),
        (status = 400, description = "User already exists or invalid fields")
    ),
    tag = "Users"
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = auth_service::register_user(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = ApiResponse<User>),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = auth_service::get_user(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "List favorite restaurants", body = ApiResponse<FavoriteRestaurantList>),
        (status = 404, description = "User not found")
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<FavoriteRestaurantList>>> {
    let resp = favorite_service::list_favorites(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/users/{id}/favorites",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "Added to favorites", body = ApiResponse<Favorite>),
        (status = 404, description = "User or restaurant not found")
    ),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<AddFavoriteRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Favorite>>)> {
    let resp = favorite_service::add_favorite(&state, id, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
