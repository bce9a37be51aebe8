use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Cuisine;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateCuisineRequest {
    pub name: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CuisineList {
    #[schema(value_type = Vec<Cuisine>)]
    pub items: Vec<Cuisine>,
}
