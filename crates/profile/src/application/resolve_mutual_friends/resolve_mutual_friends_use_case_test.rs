#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use shared_kernel::domain::value_objects::Login;
    use shared_kernel::errors::DomainError;

    use crate::application::ports::DirectoryGatewayStub;
    use crate::application::resolve_mutual_friends::{
        ResolveMutualFriendsCommand, ResolveMutualFriendsUseCase,
    };
    use crate::domain::entities::UserProfile;
    use crate::domain::repositories::ProfileRepositoryStub;

    fn seed_profile(repo: &ProfileRepositoryStub, login: &str) -> UserProfile {
        let profile = UserProfile::from_snapshot(DirectoryGatewayStub::snapshot_for(login));
        repo.seed(profile.clone());
        profile
    }

    fn cmd(username: &str) -> ResolveMutualFriendsCommand {
        ResolveMutualFriendsCommand {
            username: Login::try_new(username).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_intersection_resolved_against_local_store_only() {
        // Arrange : followers = [bob, carol], following = [carol, dave].
        // Seule "carol" est stockée localement parmi les mutuels.
        let repo = Arc::new(ProfileRepositoryStub::default());
        seed_profile(&repo, "alice");
        let carol = seed_profile(&repo, "carol");

        let directory = Arc::new(DirectoryGatewayStub::default());
        directory.set_relations(&["bob", "carol"], &["carol", "dave"]);

        let use_case = ResolveMutualFriendsUseCase::new(repo.clone(), directory.clone());

        // Act
        let friends = use_case.execute(cmd("alice")).await.unwrap();

        // Assert : ["carol"] renvoyé ET persisté sur alice
        assert_eq!(friends.len(), 1);
        assert_eq!(friends[0].username, carol.username);

        let alice = repo.raw_get("alice").unwrap();
        assert_eq!(alice.friends, vec![carol.username]);
        assert_eq!(directory.fetch_relations_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_friends_list_is_overwritten_not_merged() {
        let repo = Arc::new(ProfileRepositoryStub::default());
        let mut alice = UserProfile::from_snapshot(DirectoryGatewayStub::snapshot_for("alice"));
        alice.friends = vec![Login::from_raw("old-friend")];
        repo.seed(alice);
        seed_profile(&repo, "carol");

        let directory = Arc::new(DirectoryGatewayStub::default());
        directory.set_relations(&["carol"], &["carol"]);

        let use_case = ResolveMutualFriendsUseCase::new(repo.clone(), directory.clone());
        use_case.execute(cmd("alice")).await.unwrap();

        let alice = repo.raw_get("alice").unwrap();
        assert_eq!(alice.friends, vec![Login::from_raw("carol")]);
    }

    #[tokio::test]
    async fn test_empty_intersection_clears_friends() {
        let repo = Arc::new(ProfileRepositoryStub::default());
        let mut alice = UserProfile::from_snapshot(DirectoryGatewayStub::snapshot_for("alice"));
        alice.friends = vec![Login::from_raw("carol")];
        repo.seed(alice);

        let directory = Arc::new(DirectoryGatewayStub::default());
        directory.set_relations(&["bob"], &["dave"]);

        let use_case = ResolveMutualFriendsUseCase::new(repo.clone(), directory.clone());
        let friends = use_case.execute(cmd("alice")).await.unwrap();

        assert!(friends.is_empty());
        assert!(repo.raw_get("alice").unwrap().friends.is_empty());
    }

    #[tokio::test]
    async fn test_case_is_not_normalized_in_intersection() {
        // "Carol" (amont) et "carol" (store) sont deux identités distinctes
        let repo = Arc::new(ProfileRepositoryStub::default());
        seed_profile(&repo, "alice");
        seed_profile(&repo, "carol");

        let directory = Arc::new(DirectoryGatewayStub::default());
        directory.set_relations(&["Carol"], &["Carol"]);

        let use_case = ResolveMutualFriendsUseCase::new(repo.clone(), directory.clone());
        let friends = use_case.execute(cmd("alice")).await.unwrap();

        // "Carol" est mutuelle mais n'existe pas localement sous cette casse
        assert!(friends.is_empty());
    }

    #[tokio::test]
    async fn test_tombstoned_mutuals_are_dropped() {
        let repo = Arc::new(ProfileRepositoryStub::default());
        seed_profile(&repo, "alice");
        let mut carol = UserProfile::from_snapshot(DirectoryGatewayStub::snapshot_for("carol"));
        carol.soft_deleted = true;
        repo.seed(carol);

        let directory = Arc::new(DirectoryGatewayStub::default());
        directory.set_relations(&["carol"], &["carol"]);

        let use_case = ResolveMutualFriendsUseCase::new(repo.clone(), directory.clone());
        let friends = use_case.execute(cmd("alice")).await.unwrap();

        assert!(friends.is_empty());
        assert!(repo.raw_get("alice").unwrap().friends.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_subject_fails_without_fetch() {
        let repo = Arc::new(ProfileRepositoryStub::default());
        let directory = Arc::new(DirectoryGatewayStub::default());
        let use_case = ResolveMutualFriendsUseCase::new(repo.clone(), directory.clone());

        let result = use_case.execute(cmd("ghost")).await;

        // NotFound, et surtout : aucun appel annuaire déclenché
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert_eq!(directory.fetch_relations_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_tombstoned_subject_is_not_found() {
        let repo = Arc::new(ProfileRepositoryStub::default());
        let mut alice = UserProfile::from_snapshot(DirectoryGatewayStub::snapshot_for("alice"));
        alice.soft_deleted = true;
        repo.seed(alice);

        let directory = Arc::new(DirectoryGatewayStub::default());
        let use_case = ResolveMutualFriendsUseCase::new(repo.clone(), directory.clone());

        let result = use_case.execute(cmd("alice")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_upstream_failure_leaves_friends_untouched() {
        let repo = Arc::new(ProfileRepositoryStub::default());
        let mut alice = UserProfile::from_snapshot(DirectoryGatewayStub::snapshot_for("alice"));
        alice.friends = vec![Login::from_raw("carol")];
        repo.seed(alice);

        let directory = Arc::new(DirectoryGatewayStub::default());
        *directory.fail_with.lock().unwrap() = Some(DomainError::Upstream {
            service: "github",
            reason: "503 Service Unavailable".into(),
        });

        let use_case = ResolveMutualFriendsUseCase::new(repo.clone(), directory.clone());
        let result = use_case.execute(cmd("alice")).await;

        // Échec total, pas de persistance partielle
        assert!(matches!(result, Err(DomainError::Upstream { .. })));
        assert_eq!(
            repo.raw_get("alice").unwrap().friends,
            vec![Login::from_raw("carol")]
        );
    }
}
