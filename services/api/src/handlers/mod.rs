pub mod form;
pub mod health;
pub mod media;
pub mod profile;
pub mod session;
pub mod team;
pub mod youtube;
