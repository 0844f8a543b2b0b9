use sea_orm::entity::prelude::*;

/// Uploaded media library entry. Immutable once inserted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media_assets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Client-supplied team label, stored verbatim.
    #[sea_orm(indexed)]
    pub team_id: String,
    /// scouting | training | tactics | match | shared
    pub source: String,
    /// video | image | audio | document
    pub mime_category: String,
    pub content_type: String,
    pub file_name: String,
    /// JSON array of distinct tag strings.
    pub tags: Json,
    pub description: String,
    /// blob | object
    pub backend: String,
    pub storage_url: String,
    pub storage_path: String,
    pub uploaded_by: Uuid,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
