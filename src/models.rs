//! Public projections of the stored entities.
//!
//! Every response body is built from one of these types. Each lists exactly the
//! fields that leave the service; the password hash has no projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{banners, cuisines, favorites, restaurants, reviews, users};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_restaurant: bool,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            is_restaurant: model.is_restaurant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cuisine {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
}

impl From<cuisines::Model> for Cuisine {
    fn from(model: cuisines::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image_url: model.image_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub image_url: Option<String>,
    pub rating: f64,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub cuisine_id: Option<i32>,
    /// Joined cuisine row, `None` when the restaurant has no cuisine.
    pub cuisine: Option<Cuisine>,
}

impl Restaurant {
    pub fn with_cuisine(model: restaurants::Model, cuisine: Option<cuisines::Model>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            location: model.location,
            image_url: model.image_url,
            rating: model.rating,
            description: model.description,
            latitude: model.latitude,
            longitude: model.longitude,
            cuisine_id: model.cuisine_id,
            cuisine: cuisine.map(Cuisine::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: i32,
    pub content: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
    pub restaurant_id: i32,
    /// Author's username, joined from `users`.
    pub username: Option<String>,
}

impl Review {
    pub fn with_author(model: reviews::Model, author: Option<users::Model>) -> Self {
        Self {
            id: model.id,
            content: model.content,
            rating: model.rating,
            created_at: model.created_at,
            user_id: model.user_id,
            restaurant_id: model.restaurant_id,
            username: author.map(|user| user.username),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub restaurant_id: i32,
}

impl From<favorites::Model> for Favorite {
    fn from(model: favorites::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            restaurant_id: model.restaurant_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Banner {
    pub id: i32,
    pub image_url: String,
    pub order: i32,
}

impl From<banners::Model> for Banner {
    fn from(model: banners::Model) -> Self {
        Self {
            id: model.id,
            image_url: model.image_url,
            order: model.position,
        }
    }
}
