//! Cuisines and banners: the small lookup tables behind the home screen.

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    dto::{
        banners::{BannerList, CreateBannerRequest},
        cuisines::{CreateCuisineRequest, CuisineList},
    },
    entity::{banners, cuisines},
    error::{AppError, AppResult},
    models::{Banner, Cuisine},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_cuisines(state: &AppState) -> AppResult<ApiResponse<CuisineList>> {
    let items: Vec<Cuisine> = cuisines::Entity::find()
        .order_by_asc(cuisines::Column::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Cuisine::from)
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Cuisines", CuisineList { items }, Some(meta)))
}

pub async fn create_cuisine(
    state: &AppState,
    payload: CreateCuisineRequest,
) -> AppResult<ApiResponse<Cuisine>> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("Cuisine name is required".into()));
    }

    let existing = cuisines::Entity::find()
        .filter(cuisines::Column::Name.eq(name.as_str()))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("Cuisine already exists".into()));
    }

    let cuisine = cuisines::ActiveModel {
        id: NotSet,
        name: Set(name),
        image_url: Set(payload.image_url),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(cuisine_id = cuisine.id, "cuisine created");
    Ok(ApiResponse::success(
        "Cuisine created",
        Cuisine::from(cuisine),
        Some(Meta::empty()),
    ))
}

pub async fn list_banners(state: &AppState) -> AppResult<ApiResponse<BannerList>> {
    let items: Vec<Banner> = banners::Entity::find()
        .order_by_asc(banners::Column::Position)
        .order_by_asc(banners::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Banner::from)
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Banners", BannerList { items }, Some(meta)))
}

pub async fn create_banner(
    state: &AppState,
    payload: CreateBannerRequest,
) -> AppResult<ApiResponse<Banner>> {
    let banner = banners::ActiveModel {
        id: NotSet,
        image_url: Set(payload.image_url),
        position: Set(payload.order),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(banner_id = banner.id, order = banner.position, "banner created");
    Ok(ApiResponse::success(
        "Banner created",
        Banner::from(banner),
        Some(Meta::empty()),
    ))
}
