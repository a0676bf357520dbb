// crates/profile/src/application/list_profiles/list_profiles_command.rs

use crate::domain::params::SortField;

#[derive(Debug, Clone, Copy)]
pub struct ListProfilesCommand {
    pub sort: SortField,
}

impl ListProfilesCommand {
    pub fn new(sort: SortField) -> Self {
        Self { sort }
    }
}
