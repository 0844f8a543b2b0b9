pub mod media;
pub mod profile;
pub mod roster;
pub mod youtube;
