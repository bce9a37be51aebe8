use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};

use crate::{
    dto::restaurants::{CreateRestaurantRequest, RestaurantList},
    entity::{
        cuisines::Entity as Cuisines,
        restaurants::{ActiveModel, Column, Entity as Restaurants},
    },
    error::{AppError, AppResult},
    models::Restaurant,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Load every restaurant with its cuisine joined in, ordered by id.
pub async fn fetch_catalog(db: &DatabaseConnection) -> Result<Vec<Restaurant>, DbErr> {
    let rows = Restaurants::find()
        .find_also_related(Cuisines)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|(restaurant, cuisine)| Restaurant::with_cuisine(restaurant, cuisine))
        .collect())
}

pub async fn list_restaurants(state: &AppState) -> AppResult<ApiResponse<RestaurantList>> {
    let items = fetch_catalog(&state.orm).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Restaurants",
        RestaurantList { items },
        Some(meta),
    ))
}

pub async fn get_restaurant(state: &AppState, id: i32) -> AppResult<ApiResponse<Restaurant>> {
    let result = Restaurants::find_by_id(id)
        .find_also_related(Cuisines)
        .one(&state.orm)
        .await?;
    let (restaurant, cuisine) = match result {
        Some(row) => row,
        None => return Err(AppError::NotFound("Restaurant")),
    };
    Ok(ApiResponse::success(
        "Restaurant",
        Restaurant::with_cuisine(restaurant, cuisine),
        None,
    ))
}

pub async fn create_restaurant(
    state: &AppState,
    payload: CreateRestaurantRequest,
) -> AppResult<ApiResponse<Restaurant>> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("Restaurant name is required".into()));
    }

    let cuisine = match payload.cuisine_id {
        Some(cuisine_id) => Some(
            Cuisines::find_by_id(cuisine_id)
                .one(&state.orm)
                .await?
                .ok_or(AppError::NotFound("Cuisine"))?,
        ),
        None => None,
    };

    let restaurant = ActiveModel {
        id: NotSet,
        name: Set(name),
        location: Set(payload.location),
        image_url: Set(payload.image_url),
        rating: Set(payload.rating),
        description: Set(payload.description),
        latitude: Set(payload.latitude),
        longitude: Set(payload.longitude),
        cuisine_id: Set(payload.cuisine_id),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(restaurant_id = restaurant.id, "restaurant created");
    Ok(ApiResponse::success(
        "Restaurant created",
        Restaurant::with_cuisine(restaurant, cuisine),
        Some(Meta::empty()),
    ))
}
