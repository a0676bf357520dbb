// crates/profile/src/application/soft_delete_profile/mod.rs

mod soft_delete_profile_command;
mod soft_delete_profile_use_case;

pub use soft_delete_profile_command::SoftDeleteProfileCommand;
pub use soft_delete_profile_use_case::SoftDeleteProfileUseCase;
