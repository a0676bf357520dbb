// crates/profile/src/application/ensure_profile/ensure_profile_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::Login;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsureProfileCommand {
    pub username: Login,
}
