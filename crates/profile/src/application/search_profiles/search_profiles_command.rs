// crates/profile/src/application/search_profiles/search_profiles_command.rs

use serde::{Deserialize, Serialize};

/// Filtres de recherche ; un filtre absent est non-contraignant (match-all).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchProfilesCommand {
    pub username: Option<String>,
    pub location: Option<String>,
}
