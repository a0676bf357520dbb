// crates/profile/src/domain/entities/mod.rs

mod user_profile;

pub use user_profile::UserProfile;
