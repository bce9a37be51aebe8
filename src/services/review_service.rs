use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    dto::reviews::{CreateReviewRequest, ReviewList},
    entity::{
        restaurants::Entity as Restaurants,
        reviews::{ActiveModel, Column, Entity as Reviews},
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    models::Review,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_reviews(
    state: &AppState,
    restaurant_id: i32,
) -> AppResult<ApiResponse<ReviewList>> {
    ensure_restaurant(state, restaurant_id).await?;

    let items: Vec<Review> = Reviews::find()
        .filter(Column::RestaurantId.eq(restaurant_id))
        .find_also_related(Users)
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(review, author)| Review::with_author(review, author))
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Reviews", ReviewList { items }, Some(meta)))
}

pub async fn create_review(
    state: &AppState,
    restaurant_id: i32,
    payload: CreateReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    ensure_restaurant(state, restaurant_id).await?;

    let author = Users::find_by_id(payload.user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("User"))?;

    let review = ActiveModel {
        id: NotSet,
        content: Set(payload.content),
        rating: Set(payload.rating.get()),
        created_at: Set(Utc::now()),
        user_id: Set(author.id),
        restaurant_id: Set(restaurant_id),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        review_id = review.id,
        restaurant_id,
        user_id = author.id,
        "review created"
    );
    Ok(ApiResponse::success(
        "Review created",
        Review::with_author(review, Some(author)),
        Some(Meta::empty()),
    ))
}

async fn ensure_restaurant(state: &AppState, restaurant_id: i32) -> AppResult<()> {
    let exists = Restaurants::find_by_id(restaurant_id)
        .one(&state.orm)
        .await?;
    if exists.is_none() {
        return Err(AppError::NotFound("Restaurant"));
    }
    Ok(())
}
