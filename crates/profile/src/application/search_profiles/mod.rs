// crates/profile/src/application/search_profiles/mod.rs

mod search_profiles_command;
mod search_profiles_use_case;
mod search_profiles_use_case_test;

pub use search_profiles_command::SearchProfilesCommand;
pub use search_profiles_use_case::SearchProfilesUseCase;
