use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::{
    dto::{
        banners::{BannerList, CreateBannerRequest},
        cuisines::{CreateCuisineRequest, CuisineList},
    },
    error::AppResult,
    extract::AppJson,
    models::{Banner, Cuisine},
    response::ApiResponse,
    services::catalog_service,
    state::AppState,
};

pub fn cuisines_router() -> Router<AppState> {
    Router::new().route("/", get(list_cuisines).post(create_cuisine))
}

pub fn banners_router() -> Router<AppState> {
    Router::new().route("/", get(list_banners).post(create_banner))
}

#[utoipa::path(
    get,
    path = "/cuisines/",
    responses(
        (status = 200, description = "List cuisines by name", body = ApiResponse<CuisineList>)
    ),
    tag = "Cuisines"
)]
pub async fn list_cuisines(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CuisineList>>> {
    let resp = catalog_service::list_cuisines(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/cuisines/",
    request_body = CreateCuisineRequest,
    responses(
        (status = 201, description = "Create cuisine", body = ApiResponse<Cuisine>),
        (status = 400, description = "Cuisine already exists")
    ),
    tag = "Cuisines"
)]
pub async fn create_cuisine(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCuisineRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Cuisine>>)> {
    let resp = catalog_service::create_cuisine(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/banners/",
    responses(
        (status = 200, description = "List banners in carousel order", body = ApiResponse<BannerList>)
    ),
    tag = "Banners"
)]
pub async fn list_banners(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<BannerList>>> {
    let resp = catalog_service::list_banners(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/banners/",
    request_body = CreateBannerRequest,
    responses(
        (status = 201, description = "Create banner", body = ApiResponse<Banner>)
    ),
    tag = "Banners"
)]
pub async fn create_banner(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBannerRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Banner>>)> {
    let resp = catalog_service::create_banner(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
