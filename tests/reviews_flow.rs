mod common;

use sea_orm::{EntityTrait, PaginatorTrait};
use tayib_api::{
    dto::reviews::{CreateReviewRequest, Rating},
    entity::Reviews,
    error::AppError,
    services::review_service,
};

use common::{create_cuisine, create_restaurant, register, setup_state};

fn review(content: &str, rating: i32, user_id: i32) -> CreateReviewRequest {
    CreateReviewRequest {
        content: content.into(),
        rating: Rating::try_from(rating).unwrap(),
        user_id,
    }
}

#[tokio::test]
async fn created_review_is_listed_with_username() -> anyhow::Result<()> {
    let (state, _) = setup_state().await?;
    let user = register(&state, "karim", "karim@tayib.lb", "pw123456").await?;
    let cuisine = create_cuisine(&state, "Lebanese").await?;
    let restaurant = create_restaurant(&state, "Barbar", Some(cuisine.id)).await?;

    let created = review_service::create_review(
        &state,
        restaurant.id,
        review("Best falafel wrap in Hamra", 5, user.id),
    )
    .await?
    .data
    .unwrap();
    assert_eq!(created.username.as_deref(), Some("karim"));
    assert_eq!(created.restaurant_id, restaurant.id);
    assert_eq!(created.rating, 5);

    let listed = review_service::list_reviews(&state, restaurant.id)
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].content, "Best falafel wrap in Hamra");
    assert_eq!(listed[0].rating, 5);
    assert_eq!(listed[0].username.as_deref(), Some("karim"));
    assert_eq!(listed[0].id, created.id);
    Ok(())
}

#[tokio::test]
async fn reviews_are_scoped_to_their_restaurant() -> anyhow::Result<()> {
    let (state, _) = setup_state().await?;
    let user = register(&state, "karim", "karim@tayib.lb", "pw123456").await?;
    let barbar = create_restaurant(&state, "Barbar", None).await?;
    let tawlet = create_restaurant(&state, "Tawlet", None).await?;

    review_service::create_review(&state, barbar.id, review("Quick and cheap", 4, user.id))
        .await?;
    review_service::create_review(&state, tawlet.id, review("Homely", 5, user.id)).await?;
    review_service::create_review(&state, tawlet.id, review("Busy at lunch", 3, user.id)).await?;

    let barbar_reviews = review_service::list_reviews(&state, barbar.id).await?;
    assert_eq!(barbar_reviews.data.unwrap().items.len(), 1);

    let tawlet_reviews = review_service::list_reviews(&state, tawlet.id).await?;
    assert_eq!(tawlet_reviews.meta.unwrap().total, Some(2));
    Ok(())
}

#[tokio::test]
async fn review_for_missing_restaurant_writes_nothing() -> anyhow::Result<()> {
    let (state, _) = setup_state().await?;
    let user = register(&state, "karim", "karim@tayib.lb", "pw123456").await?;

    let err = review_service::create_review(&state, 999, review("Ghost kitchen", 2, user.id))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Restaurant")));
    assert_eq!(Reviews::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn review_by_missing_user_writes_nothing() -> anyhow::Result<()> {
    let (state, _) = setup_state().await?;
    let restaurant = create_restaurant(&state, "Barbar", None).await?;

    let err = review_service::create_review(&state, restaurant.id, review("Anonymous", 1, 42))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound("User")));
    assert_eq!(Reviews::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn listing_reviews_of_missing_restaurant_is_not_found() -> anyhow::Result<()> {
    let (state, _) = setup_state().await?;
    let err = review_service::list_reviews(&state, 7).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Restaurant")));
    Ok(())
}

#[tokio::test]
async fn rating_only_review_keeps_empty_content() -> anyhow::Result<()> {
    let (state, _) = setup_state().await?;
    let user = register(&state, "karim", "karim@tayib.lb", "pw123456").await?;
    let restaurant = create_restaurant(&state, "Barbar", None).await?;

    for content in ["", "   "] {
        let created =
            review_service::create_review(&state, restaurant.id, review(content, 4, user.id))
                .await?
                .data
                .unwrap();
        assert_eq!(created.content, content);
    }

    let listed = review_service::list_reviews(&state, restaurant.id)
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().any(|review| review.content.is_empty()));
    Ok(())
}
