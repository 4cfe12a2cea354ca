pub mod summary;
pub mod tables;
