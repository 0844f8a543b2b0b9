pub mod db;
pub mod storage;
pub mod youtube;
