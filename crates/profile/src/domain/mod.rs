// crates/profile/src/domain/mod.rs

pub mod entities;
pub mod params;
pub mod repositories;
