use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};
use tayib_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{banners, cuisines, restaurants, users},
    services::auth_service::hash_password,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let user_id = ensure_user(&orm, "demo", "demo@tayib.lb", "demo1234").await?;
    seed_catalog(&orm).await?;
    seed_banners(&orm).await?;

    println!("Seed completed. Demo user ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i32> {
    if let Some(existing) = users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }

    let password_hash = hash_password(password).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let user = users::ActiveModel {
        id: NotSet,
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash),
        is_restaurant: Set(false),
    }
    .insert(orm)
    .await?;

    println!("Ensured user {email}");
    Ok(user.id)
}

async fn ensure_cuisine(orm: &DatabaseConnection, name: &str) -> anyhow::Result<i32> {
    if let Some(existing) = cuisines::Entity::find()
        .filter(cuisines::Column::Name.eq(name))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }
    let cuisine = cuisines::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        image_url: Set(Some(format!("/assets/cuisines/{}.jpg", name.to_lowercase()))),
    }
    .insert(orm)
    .await?;
    Ok(cuisine.id)
}

async fn seed_catalog(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let catalog = [
        (
            "Barbar",
            "Lebanese",
            "Hamra, Beirut",
            4.4,
            "Round-the-clock shawarma, manakish and juices.",
            33.8963,
            35.4805,
        ),
        (
            "Tawlet",
            "Lebanese",
            "Mar Mikhael, Beirut",
            4.7,
            "Home cooks from across Lebanon rotate through a daily buffet.",
            33.8979,
            35.5236,
        ),
        (
            "Sushi Bar",
            "Japanese",
            "Gemmayzeh, Beirut",
            4.2,
            "Nigiri and maki with a small sake list.",
            33.8955,
            35.5159,
        ),
        (
            "Tavolina",
            "Italian",
            "Mar Mikhael, Beirut",
            4.5,
            "Wood-fired pizza and fresh pasta.",
            33.8983,
            35.5247,
        ),
    ];

    for (name, cuisine, location, rating, description, latitude, longitude) in catalog {
        let exists = restaurants::Entity::find()
            .filter(restaurants::Column::Name.eq(name))
            .count(orm)
            .await?;
        if exists > 0 {
            continue;
        }
        let cuisine_id = ensure_cuisine(orm, cuisine).await?;
        restaurants::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            location: Set(location.to_string()),
            image_url: Set(Some(format!(
                "/assets/restaurants/{}.jpg",
                name.to_lowercase().replace(' ', "-")
            ))),
            rating: Set(rating),
            description: Set(Some(description.to_string())),
            latitude: Set(latitude),
            longitude: Set(longitude),
            cuisine_id: Set(Some(cuisine_id)),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded restaurants");
    Ok(())
}

async fn seed_banners(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if banners::Entity::find().count(orm).await? > 0 {
        return Ok(());
    }
    for order in 1..=3 {
        banners::ActiveModel {
            id: NotSet,
            image_url: Set(format!("/assets/banners/banner-{order}.jpg")),
            position: Set(order),
        }
        .insert(orm)
        .await?;
    }
    println!("Seeded banners");
    Ok(())
}
