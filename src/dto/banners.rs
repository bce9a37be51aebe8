use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Banner;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateBannerRequest {
    pub image_url: String,
    pub order: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct BannerList {
    #[schema(value_type = Vec<Banner>)]
    pub items: Vec<Banner>,
}
