#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use std::time::Duration;

    use shared_kernel::domain::value_objects::Login;
    use shared_kernel::errors::DomainError;

    use crate::application::ensure_profile::{EnsureProfileCommand, EnsureProfileUseCase};
    use crate::application::ports::DirectoryGatewayStub;
    use crate::domain::entities::UserProfile;
    use crate::domain::repositories::ProfileRepositoryStub;

    fn setup(
        repo: Arc<ProfileRepositoryStub>,
        directory: Arc<DirectoryGatewayStub>,
    ) -> EnsureProfileUseCase {
        EnsureProfileUseCase::new(repo, directory)
    }

    fn cmd(username: &str) -> EnsureProfileCommand {
        EnsureProfileCommand {
            username: Login::try_new(username).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_unseen_username_fetches_once_and_persists() {
        // Arrange : store vide, annuaire qui connaît "alice"
        let repo = Arc::new(ProfileRepositoryStub::default());
        let directory = Arc::new(DirectoryGatewayStub::with_snapshot("alice"));
        let use_case = setup(Arc::clone(&repo), Arc::clone(&directory));

        // Act
        let outcome = use_case.execute(cmd("alice")).await.unwrap();

        // Assert : exactement un fetch externe, exactement un enregistrement
        assert!(outcome.created);
        assert_eq!(outcome.profile.username.as_str(), "alice");
        assert_eq!(outcome.profile.followers, 10);
        assert!(!outcome.profile.soft_deleted);
        assert!(outcome.profile.friends.is_empty());
        assert_eq!(directory.fetch_profile_calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 1);

        let stored = repo.raw_get("alice").expect("alice should be stored");
        assert_eq!(stored, outcome.profile);
    }

    #[tokio::test]
    async fn test_existing_profile_returned_without_external_call() {
        // Arrange : "alice" déjà en base
        let repo = Arc::new(ProfileRepositoryStub::default());
        let mut existing =
            UserProfile::from_snapshot(DirectoryGatewayStub::snapshot_for("alice"));
        existing.bio = Some("stale bio, and that is fine".to_string());
        repo.seed(existing.clone());

        let directory = Arc::new(DirectoryGatewayStub::with_snapshot("alice"));
        let use_case = setup(Arc::clone(&repo), Arc::clone(&directory));

        // Act
        let outcome = use_case.execute(cmd("alice")).await.unwrap();

        // Assert : zéro fetch, enregistrement inchangé (pas de refresh)
        assert!(!outcome.created);
        assert_eq!(outcome.profile, existing);
        assert_eq!(directory.fetch_profile_calls.load(Ordering::SeqCst), 0);
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_tombstoned_profile_is_not_a_hit() {
        // Un profil soft-deleted n'est pas visible : on repart vers l'annuaire,
        // et l'insertion échoue sur la contrainte d'unicité (le tombstone
        // occupe toujours la clé). Erreur de store, pas de crash.
        let repo = Arc::new(ProfileRepositoryStub::default());
        let mut deleted = UserProfile::from_snapshot(DirectoryGatewayStub::snapshot_for("alice"));
        deleted.soft_deleted = true;
        repo.seed(deleted);

        let directory = Arc::new(DirectoryGatewayStub::with_snapshot("alice"));
        let use_case = setup(Arc::clone(&repo), Arc::clone(&directory));

        let result = use_case.execute(cmd("alice")).await;

        assert!(matches!(result, Err(DomainError::AlreadyExists { .. })));
        assert_eq!(directory.fetch_profile_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates_and_nothing_is_stored() {
        let repo = Arc::new(ProfileRepositoryStub::default());
        let directory = Arc::new(DirectoryGatewayStub::default());
        *directory.fail_with.lock().unwrap() = Some(DomainError::Upstream {
            service: "github",
            reason: "connection refused".into(),
        });
        let use_case = setup(Arc::clone(&repo), Arc::clone(&directory));

        let result = use_case.execute(cmd("alice")).await;

        assert!(matches!(result, Err(DomainError::Upstream { .. })));
        assert!(repo.raw_get("alice").is_none());
    }

    #[tokio::test]
    async fn test_unknown_username_propagates_upstream_error() {
        // Annuaire sans snapshot = 404 amont -> Upstream, pas de création
        let repo = Arc::new(ProfileRepositoryStub::default());
        let directory = Arc::new(DirectoryGatewayStub::default());
        let use_case = setup(Arc::clone(&repo), Arc::clone(&directory));

        let result = use_case.execute(cmd("nobody-here")).await;

        assert!(matches!(result, Err(DomainError::Upstream { .. })));
        assert!(repo.raw_get("nobody-here").is_none());
    }

    #[tokio::test]
    async fn test_concurrent_first_fetch_is_single_flighted() {
        // 10 requêtes simultanées pour un username jamais vu :
        // un seul fetch annuaire, une seule insertion, 1 created / 9 found.
        let repo = Arc::new(ProfileRepositoryStub::default());
        let directory = Arc::new(DirectoryGatewayStub::with_snapshot("alice"));
        *directory.latency.lock().unwrap() = Some(Duration::from_millis(20));
        let use_case = Arc::new(setup(Arc::clone(&repo), Arc::clone(&directory)));

        let mut handles = vec![];
        for _ in 0..10 {
            let uc = Arc::clone(&use_case);
            handles.push(tokio::spawn(async move { uc.execute(cmd("alice")).await }));
        }

        let mut created_count = 0;
        for h in handles {
            let outcome = h.await.unwrap().expect("all concurrent calls must succeed");
            if outcome.created {
                created_count += 1;
            }
        }

        assert_eq!(created_count, 1);
        assert_eq!(directory.fetch_profile_calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 1);
    }
}
