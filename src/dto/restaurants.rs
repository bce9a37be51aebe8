use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Restaurant;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub location: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: f64,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub cuisine_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct RestaurantList {
    #[schema(value_type = Vec<Restaurant>)]
    pub items: Vec<Restaurant>,
}
