pub mod duration;
pub mod repository;
pub mod roster;
pub mod types;
