use sea_orm::entity::prelude::*;

/// Squad candidate shown on the team selection board.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "candidates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub squad: String,
    pub full_name: String,
    /// goalkeeper | defender | midfielder | forward
    pub position: String,
    pub shirt_number: i16,
    pub club: String,
    pub birth_year: i16,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
