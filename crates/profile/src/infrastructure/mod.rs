// crates/profile/src/infrastructure/mod.rs

pub mod api;
pub mod github;
pub mod postgres;
