use uuid::Uuid;

use crate::domain::repository::CandidateRepository;
use crate::domain::roster::{U17_WORLD_CUP_ROSTER, U17_WORLD_CUP_SQUAD};
use crate::domain::types::Candidate;
use crate::error::ApiError;

// ── SeedRoster ───────────────────────────────────────────────────────────────

/// Replaces the whole candidates table with the U17 World Cup squad.
pub struct SeedRosterUseCase<R: CandidateRepository> {
    pub candidates: R,
}

impl<R: CandidateRepository> SeedRosterUseCase<R> {
    pub async fn execute(&self) -> Result<u64, ApiError> {
        let squad: Vec<Candidate> = U17_WORLD_CUP_ROSTER
            .iter()
            .map(|&(shirt_number, full_name, position, club, birth_year)| Candidate {
                id: Uuid::now_v7(),
                squad: U17_WORLD_CUP_SQUAD.to_owned(),
                full_name: full_name.to_owned(),
                position,
                shirt_number,
                club: club.to_owned(),
                birth_year,
            })
            .collect();
        let inserted = self.candidates.replace_all(&squad).await?;
        tracing::warn!(inserted, squad = U17_WORLD_CUP_SQUAD, "candidates table reseeded");
        Ok(inserted)
    }
}
