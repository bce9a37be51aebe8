use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_restaurant: bool,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
