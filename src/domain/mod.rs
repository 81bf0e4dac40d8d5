pub mod mapping;
pub mod models;
