// crates/profile/src/application/resolve_mutual_friends/resolve_mutual_friends_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::Login;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveMutualFriendsCommand {
    pub username: Login,
}
