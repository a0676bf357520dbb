// crates/profile/src/application/ensure_profile/mod.rs

mod ensure_profile_command;
mod ensure_profile_use_case;
mod ensure_profile_use_case_test;

pub use ensure_profile_command::EnsureProfileCommand;
pub use ensure_profile_use_case::{EnsureProfileOutcome, EnsureProfileUseCase};
