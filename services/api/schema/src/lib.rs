//! sea-orm entities for the Touchline API database.

pub mod candidates;
pub mod media_assets;
pub mod profile_photos;
