use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Candidates::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Candidates::Squad).string().not_null())
                    .col(ColumnDef::new(Candidates::FullName).string().not_null())
                    .col(ColumnDef::new(Candidates::Position).string().not_null())
                    .col(ColumnDef::new(Candidates::ShirtNumber).small_integer().not_null())
                    .col(ColumnDef::new(Candidates::Club).string().not_null())
                    .col(ColumnDef::new(Candidates::BirthYear).small_integer().not_null())
                    .col(
                        ColumnDef::new(Candidates::CreatedAt)
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
            .drop_table(Table::drop().table(Candidates::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Candidates {
    Table,
    Id,
    Squad,
    FullName,
    Position,
    ShirtNumber,
    Club,
    BirthYear,
    CreatedAt,
}
