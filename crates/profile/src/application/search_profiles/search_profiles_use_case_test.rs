#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::application::ports::DirectoryGatewayStub;
    use crate::application::search_profiles::{SearchProfilesCommand, SearchProfilesUseCase};
    use crate::domain::entities::UserProfile;
    use crate::domain::repositories::ProfileRepositoryStub;

    fn seed(repo: &ProfileRepositoryStub, login: &str, location: Option<&str>) {
        let mut profile = UserProfile::from_snapshot(DirectoryGatewayStub::snapshot_for(login));
        profile.location = location.map(str::to_string);
        repo.seed(profile);
    }

    fn setup() -> (Arc<ProfileRepositoryStub>, SearchProfilesUseCase) {
        let repo = Arc::new(ProfileRepositoryStub::default());
        let use_case = SearchProfilesUseCase::new(repo.clone());
        (repo, use_case)
    }

    #[tokio::test]
    async fn test_no_filters_returns_all_active() {
        let (repo, use_case) = setup();
        seed(&repo, "alice", Some("Paris"));
        seed(&repo, "bob", None);

        let found = use_case.execute(SearchProfilesCommand::default()).await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_username_filter_is_case_insensitive_substring() {
        let (repo, use_case) = setup();
        seed(&repo, "Alice-Dev", None);
        seed(&repo, "bob", None);

        let found = use_case
            .execute(SearchProfilesCommand {
                username: Some("aLiCe".to_string()),
                location: None,
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username.as_str(), "Alice-Dev");
    }

    #[tokio::test]
    async fn test_filters_combine_conjunctively() {
        let (repo, use_case) = setup();
        seed(&repo, "alice", Some("Paris, France"));
        seed(&repo, "alicia", Some("Berlin"));
        seed(&repo, "bob", Some("Paris"));

        let found = use_case
            .execute(SearchProfilesCommand {
                username: Some("ali".to_string()),
                location: Some("paris".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username.as_str(), "alice");
    }

    #[tokio::test]
    async fn test_profiles_without_location_do_not_match_location_filter() {
        let (repo, use_case) = setup();
        seed(&repo, "alice", None);

        let found = use_case
            .execute(SearchProfilesCommand {
                username: None,
                location: Some("paris".to_string()),
            })
            .await
            .unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_empty_string_filter_is_treated_as_absent() {
        // Une query `?location=` se désérialise en `Some("")` : elle ne doit
        // contraindre personne, pas même les profils sans location
        let (repo, use_case) = setup();
        seed(&repo, "alice", None);
        seed(&repo, "bob", Some("Paris"));

        let found = use_case
            .execute(SearchProfilesCommand {
                username: Some(String::new()),
                location: Some(String::new()),
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_tombstones_are_excluded() {
        let (repo, use_case) = setup();
        seed(&repo, "alice", Some("Paris"));
        let mut deleted = UserProfile::from_snapshot(DirectoryGatewayStub::snapshot_for("bob"));
        deleted.soft_deleted = true;
        repo.seed(deleted);

        let found = use_case.execute(SearchProfilesCommand::default()).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username.as_str(), "alice");
    }
}
