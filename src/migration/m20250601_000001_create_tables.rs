use sea_orm::Schema;
use sea_orm_migration::prelude::*;

use crate::entity::{Banners, Cuisines, Favorites, Restaurants, Reviews, Users, reviews};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Tables are derived from the entities so Postgres and SQLite share one definition.
        let schema = Schema::new(manager.get_database_backend());

        manager
            .create_table(schema.create_table_from_entity(Users).if_not_exists().to_owned())
            .await?;
        manager
            .create_table(schema.create_table_from_entity(Cuisines).if_not_exists().to_owned())
            .await?;
        manager
            .create_table(
                schema
                    .create_table_from_entity(Restaurants)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        let mut review_table = schema.create_table_from_entity(Reviews);
        review_table
            .if_not_exists()
            .check(Expr::col(reviews::Column::Rating).between(1, 5));
        manager.create_table(review_table).await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviews_restaurant_id")
                    .table(Reviews)
                    .col(reviews::Column::RestaurantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(schema.create_table_from_entity(Favorites).if_not_exists().to_owned())
            .await?;
        manager
            .create_table(schema.create_table_from_entity(Banners).if_not_exists().to_owned())
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Banners).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Favorites).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Restaurants).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cuisines).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
