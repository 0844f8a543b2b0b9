use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaAssets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MediaAssets::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MediaAssets::TeamId).text().not_null())
                    .col(ColumnDef::new(MediaAssets::Source).string().not_null())
                    .col(ColumnDef::new(MediaAssets::MimeCategory).string().not_null())
                    .col(ColumnDef::new(MediaAssets::ContentType).string().not_null())
                    .col(ColumnDef::new(MediaAssets::FileName).string().not_null())
                    .col(
                        ColumnDef::new(MediaAssets::Tags)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(MediaAssets::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(MediaAssets::Backend).string().not_null())
                    .col(ColumnDef::new(MediaAssets::StorageUrl).text().not_null())
                    .col(ColumnDef::new(MediaAssets::StoragePath).text().not_null())
                    .col(ColumnDef::new(MediaAssets::UploadedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(MediaAssets::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(MediaAssets::Table)
                    .col(MediaAssets::TeamId)
                    .col(MediaAssets::UploadedAt)
                    .name("idx_media_assets_team_id_uploaded_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaAssets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MediaAssets {
    Table,
    Id,
    TeamId,
    Source,
    MimeCategory,
    ContentType,
    FileName,
    Tags,
    Description,
    Backend,
    StorageUrl,
    StoragePath,
    UploadedBy,
    UploadedAt,
}
