// crates/profile/src/domain/params/sort_field.rs

use shared_kernel::errors::{DomainError, Result};

/// Champs de tri autorisés pour le listing des profils.
///
/// Whitelist délibérée : le `sortBy` vient de l'appelant et finit dans un
/// ORDER BY, on n'y laisse donc passer que des noms de colonnes connus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Username,
    Name,
    Location,
    PublicRepos,
    PublicGists,
    Followers,
    Following,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Parse l'entrée query-string ; absence = tri par username
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            None | Some("") => Ok(Self::Username),
            Some("username") => Ok(Self::Username),
            Some("name") => Ok(Self::Name),
            Some("location") => Ok(Self::Location),
            Some("public_repos") => Ok(Self::PublicRepos),
            Some("public_gists") => Ok(Self::PublicGists),
            Some("followers") => Ok(Self::Followers),
            Some("following") => Ok(Self::Following),
            Some("created_at") => Ok(Self::CreatedAt),
            Some("updated_at") => Ok(Self::UpdatedAt),
            Some(other) => Err(DomainError::Validation {
                field: "sortBy",
                reason: format!("'{other}' is not a sortable field"),
            }),
        }
    }

    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Name => "name",
            Self::Location => "location",
            Self::PublicRepos => "public_repos",
            Self::PublicGists => "public_gists",
            Self::Followers => "followers",
            Self::Following => "following",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_fields() {
        assert_eq!(SortField::parse(Some("followers")).unwrap(), SortField::Followers);
        assert_eq!(SortField::parse(Some("created_at")).unwrap(), SortField::CreatedAt);
    }

    #[test]
    fn test_absent_defaults_to_username() {
        assert_eq!(SortField::parse(None).unwrap(), SortField::Username);
        assert_eq!(SortField::parse(Some("")).unwrap(), SortField::Username);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = SortField::parse(Some("friends; DROP TABLE user_profiles")).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "sortBy", .. }));
    }
}
