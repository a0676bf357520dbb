// crates/profile/src/infrastructure/api/mod.rs

pub mod http;
