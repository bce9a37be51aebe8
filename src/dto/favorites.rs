use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Restaurant;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub restaurant_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FavoriteRestaurantList {
    #[schema(value_type = Vec<Restaurant>)]
    pub items: Vec<Restaurant>,
}
