// crates/profile/src/application/list_profiles/mod.rs

mod list_profiles_command;
mod list_profiles_use_case;

pub use list_profiles_command::ListProfilesCommand;
pub use list_profiles_use_case::ListProfilesUseCase;
