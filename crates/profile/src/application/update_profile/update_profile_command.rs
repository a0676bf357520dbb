// crates/profile/src/application/update_profile/update_profile_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::Login;

use crate::domain::params::ProfilePatch;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileCommand {
    pub username: Login,
    pub patch: ProfilePatch,
}
