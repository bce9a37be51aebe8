use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::{
        restaurants::{CreateRestaurantRequest, RestaurantList},
        reviews::{CreateReviewRequest, ReviewList},
    },
    error::AppResult,
    extract::AppJson,
    models::{Restaurant, Review},
    response::ApiResponse,
    services::{restaurant_service, review_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_restaurants).post(create_restaurant))
        .route("/{id}", get(get_restaurant))
        .route("/{id}/reviews", get(list_reviews).post(create_review))
}

#[utoipa::path(
    get,
    path = "/restaurants/",
    responses(
        (status = 200, description = "List restaurants with their cuisine", body = ApiResponse<RestaurantList>)
    ),
    tag = "Restaurants"
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<RestaurantList>>> {
    let resp = restaurant_service::list_restaurants(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/restaurants/",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Create restaurant", body = ApiResponse<Restaurant>),
        (status = 404, description = "Cuisine not found")
    ),
    tag = "Restaurants"
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateRestaurantRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Restaurant>>)> {
    let resp = restaurant_service::create_restaurant(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Get restaurant", body = ApiResponse<Restaurant>),
        (status = 404, description = "Restaurant not found"),
    ),
    tag = "Restaurants"
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Restaurant>>> {
    let resp = restaurant_service::get_restaurant(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}/reviews",
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "List reviews, newest first", body = ApiResponse<ReviewList>),
        (status = 404, description = "Restaurant not found"),
    ),
    tag = "Reviews"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ReviewList>>> {
    let resp = review_service::list_reviews(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/restaurants/{id}/reviews",
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<Review>),
        (status = 404, description = "Restaurant or user not found"),
        (status = 422, description = "Rating outside 1..=5"),
    ),
    tag = "Reviews"
)]
pub async fn create_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Review>>)> {
    let resp = review_service::create_review(&state, id, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
