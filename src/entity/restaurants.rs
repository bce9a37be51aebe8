use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub image_url: Option<String>,
    pub rating: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub cuisine_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cuisines::Entity",
        from = "Column::CuisineId",
        to = "super::cuisines::Column::Id"
    )]
    Cuisines,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::cuisines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cuisines.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
