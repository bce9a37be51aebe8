use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    dto::favorites::{AddFavoriteRequest, FavoriteRestaurantList},
    entity::{
        cuisines::Entity as Cuisines,
        favorites::{ActiveModel, Column, Entity as Favorites},
        restaurants::{self, Entity as Restaurants},
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    models::{Favorite, Restaurant},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_favorites(
    state: &AppState,
    user_id: i32,
) -> AppResult<ApiResponse<FavoriteRestaurantList>> {
    ensure_user(state, user_id).await?;

    let favorites = Favorites::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?;

    // Favorites carry no foreign key, so restaurants are batch-fetched and
    // links to deleted restaurants are skipped.
    let ids: Vec<i32> = favorites.iter().map(|f| f.restaurant_id).collect();
    let mut by_id: HashMap<i32, Restaurant> = Restaurants::find()
        .filter(restaurants::Column::Id.is_in(ids))
        .find_also_related(Cuisines)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(restaurant, cuisine)| (restaurant.id, Restaurant::with_cuisine(restaurant, cuisine)))
        .collect();

    let mut items = Vec::with_capacity(favorites.len());
    for favorite in &favorites {
        if let Some(restaurant) = by_id.remove(&favorite.restaurant_id) {
            items.push(restaurant);
        }
    }

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "OK",
        FavoriteRestaurantList { items },
        Some(meta),
    ))
}

pub async fn add_favorite(
    state: &AppState,
    user_id: i32,
    payload: AddFavoriteRequest,
) -> AppResult<ApiResponse<Favorite>> {
    ensure_user(state, user_id).await?;

    let restaurant = Restaurants::find_by_id(payload.restaurant_id)
        .one(&state.orm)
        .await?;
    if restaurant.is_none() {
        return Err(AppError::NotFound("Restaurant"));
    }

    let existing = Favorites::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::RestaurantId.eq(payload.restaurant_id))
        .one(&state.orm)
        .await?;

    let favorite = if let Some(fav) = existing {
        fav
    } else {
        let fav = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            restaurant_id: Set(payload.restaurant_id),
        }
        .insert(&state.orm)
        .await?;
        tracing::info!(user_id, restaurant_id = fav.restaurant_id, "favorite added");
        fav
    };

    Ok(ApiResponse::success(
        "Added to favorites",
        Favorite::from(favorite),
        Some(Meta::empty()),
    ))
}

async fn ensure_user(state: &AppState, user_id: i32) -> AppResult<()> {
    let user = Users::find_by_id(user_id).one(&state.orm).await?;
    if user.is_none() {
        return Err(AppError::NotFound("User"));
    }
    Ok(())
}
