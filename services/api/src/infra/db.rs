use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, TransactionTrait,
    sea_query::OnConflict,
};

use touchline_api_schema::{candidates, media_assets, profile_photos};

use crate::domain::repository::{
    CandidateRepository, MediaAssetRepository, ProfilePhotoRepository,
};
use crate::domain::types::{Candidate, MediaAsset, ProfilePhoto};
use crate::error::ApiError;

// ── Media asset repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMediaAssetRepository {
    pub db: DatabaseConnection,
}

impl MediaAssetRepository for DbMediaAssetRepository {
    async fn create(&self, asset: &MediaAsset) -> Result<(), ApiError> {
        media_assets::ActiveModel {
            id: Set(asset.id.0),
            team_id: Set(asset.team_id.0.clone()),
            source: Set(asset.source.as_str().to_owned()),
            mime_category: Set(asset.mime_category.as_str().to_owned()),
            content_type: Set(asset.content_type.clone()),
            file_name: Set(asset.file_name.clone()),
            tags: Set(serde_json::Value::from(asset.tags.clone())),
            description: Set(asset.description.clone()),
            backend: Set(asset.backend.as_str().to_owned()),
            storage_url: Set(asset.storage_url.clone()),
            storage_path: Set(asset.storage_path.clone()),
            uploaded_by: Set(asset.uploaded_by),
            uploaded_at: Set(asset.uploaded_at),
        }
        .insert(&self.db)
        .await
        .context("create media asset")?;
        Ok(())
    }
}

// ── Profile photo repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfilePhotoRepository {
    pub db: DatabaseConnection,
}

impl ProfilePhotoRepository for DbProfilePhotoRepository {
    async fn upsert(&self, photo: &ProfilePhoto) -> Result<(), ApiError> {
        let row = profile_photos::ActiveModel {
            player_id: Set(photo.player_id.0),
            player_type: Set(photo.player_type.as_str().to_owned()),
            storage_path: Set(photo.storage_path.clone()),
            public_url: Set(photo.public_url.clone()),
            updated_at: Set(photo.updated_at),
        };
        profile_photos::Entity::insert(row)
            .on_conflict(
                OnConflict::column(profile_photos::Column::PlayerId)
                    .update_columns([
                        profile_photos::Column::PlayerType,
                        profile_photos::Column::StoragePath,
                        profile_photos::Column::PublicUrl,
                        profile_photos::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert profile photo")?;
        Ok(())
    }
}

// ── Candidate repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCandidateRepository {
    pub db: DatabaseConnection,
}

impl CandidateRepository for DbCandidateRepository {
    async fn replace_all(&self, candidates: &[Candidate]) -> Result<u64, ApiError> {
        let now = chrono::Utc::now();
        let rows: Vec<candidates::ActiveModel> = candidates
            .iter()
            .map(|c| candidates::ActiveModel {
                id: Set(c.id),
                squad: Set(c.squad.clone()),
                full_name: Set(c.full_name.clone()),
                position: Set(c.position.as_str().to_owned()),
                shirt_number: Set(c.shirt_number),
                club: Set(c.club.clone()),
                birth_year: Set(c.birth_year),
                created_at: Set(now),
            })
            .collect();
        let inserted = rows.len() as u64;

        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    let deleted = candidates::Entity::delete_many().exec(txn).await?;
                    tracing::debug!(deleted = deleted.rows_affected, "candidates cleared");
                    if !rows.is_empty() {
                        candidates::Entity::insert_many(rows)
                            .exec_without_returning(txn)
                            .await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("replace candidates")?;
        Ok(inserted)
    }
}
