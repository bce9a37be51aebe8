use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, RegisterRequest},
        banners::{BannerList, CreateBannerRequest},
        chat::{ChatReply, ChatRequest},
        cuisines::{CreateCuisineRequest, CuisineList},
        favorites::{AddFavoriteRequest, FavoriteRestaurantList},
        restaurants::{CreateRestaurantRequest, RestaurantList},
        reviews::{CreateReviewRequest, ReviewList},
    },
    models::{Banner, Cuisine, Favorite, Restaurant, Review, User},
    response::{ApiResponse, ErrorData, Meta},
    routes::{auth, catalog, chat, health, restaurants, users},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Tayib API", description = "Restaurant discovery and review backend"),
    paths(
        health::health_check,
        auth::login,
        users::register,
        users::get_user,
        users::list_favorites,
        users::add_favorite,
        restaurants::list_restaurants,
        restaurants::create_restaurant,
        restaurants::get_restaurant,
        restaurants::list_reviews,
        restaurants::create_review,
        catalog::list_cuisines,
        catalog::create_cuisine,
        catalog::list_banners,
        catalog::create_banner,
        chat::chat
    ),
    components(
        schemas(
            User,
            Cuisine,
            Restaurant,
            Review,
            Favorite,
            Banner,
            LoginRequest,
            RegisterRequest,
            CreateRestaurantRequest,
            CreateReviewRequest,
            CreateCuisineRequest,
            CreateBannerRequest,
            AddFavoriteRequest,
            ChatRequest,
            ChatReply,
            RestaurantList,
            ReviewList,
            CuisineList,
            BannerList,
            FavoriteRestaurantList,
            health::HealthData,
            Meta,
            ErrorData,
            ApiResponse<ErrorData>,
            ApiResponse<User>,
            ApiResponse<Restaurant>,
            ApiResponse<RestaurantList>,
            ApiResponse<Review>,
            ApiResponse<ReviewList>,
            ApiResponse<ChatReply>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Credential check"),
        (name = "Users", description = "User registration and lookup"),
        (name = "Restaurants", description = "Restaurant catalog"),
        (name = "Reviews", description = "Restaurant reviews"),
        (name = "Favorites", description = "Favorite restaurants per user"),
        (name = "Cuisines", description = "Cuisine endpoints"),
        (name = "Banners", description = "Home carousel banners"),
        (name = "Chat", description = "Catalog-grounded assistant"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
