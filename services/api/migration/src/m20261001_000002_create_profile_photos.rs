use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfilePhotos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfilePhotos::PlayerId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProfilePhotos::PlayerType).string().not_null())
                    .col(ColumnDef::new(ProfilePhotos::StoragePath).text().not_null())
                    .col(ColumnDef::new(ProfilePhotos::PublicUrl).text().not_null())
                    .col(
                        ColumnDef::new(ProfilePhotos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfilePhotos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProfilePhotos {
    Table,
    PlayerId,
    PlayerType,
    StoragePath,
    PublicUrl,
    UpdatedAt,
}
