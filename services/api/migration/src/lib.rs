use sea_orm_migration::prelude::*;

mod m20261001_000001_create_media_assets;
mod m20261001_000002_create_profile_photos;
mod m20261001_000003_create_candidates;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_media_assets::Migration),
            Box::new(m20261001_000002_create_profile_photos::Migration),
            Box::new(m20261001_000003_create_candidates::Migration),
        ]
    }
}
