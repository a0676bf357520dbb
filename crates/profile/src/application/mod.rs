// crates/profile/src/application/mod.rs

pub mod ensure_profile;
pub mod list_profiles;
pub mod ports;
pub mod resolve_mutual_friends;
pub mod search_profiles;
pub mod soft_delete_profile;
pub mod update_profile;
