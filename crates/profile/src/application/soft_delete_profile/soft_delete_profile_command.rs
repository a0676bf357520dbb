// crates/profile/src/application/soft_delete_profile/soft_delete_profile_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::Login;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftDeleteProfileCommand {
    pub username: Login,
}
