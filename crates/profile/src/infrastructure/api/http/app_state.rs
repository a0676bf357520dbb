// crates/profile/src/infrastructure/api/http/app_state.rs

use std::sync::Arc;

use crate::application::ensure_profile::EnsureProfileUseCase;
use crate::application::list_profiles::ListProfilesUseCase;
use crate::application::ports::DirectoryGateway;
use crate::application::resolve_mutual_friends::ResolveMutualFriendsUseCase;
use crate::application::search_profiles::SearchProfilesUseCase;
use crate::application::soft_delete_profile::SoftDeleteProfileUseCase;
use crate::application::update_profile::UpdateProfileUseCase;
use crate::domain::repositories::ProfileRepository;

#[derive(Clone)]
pub struct AppState {
    pub ensure_profile: Arc<EnsureProfileUseCase>,
    pub resolve_mutual_friends: Arc<ResolveMutualFriendsUseCase>,
    pub search_profiles: Arc<SearchProfilesUseCase>,
    pub list_profiles: Arc<ListProfilesUseCase>,
    pub soft_delete_profile: Arc<SoftDeleteProfileUseCase>,
    pub update_profile: Arc<UpdateProfileUseCase>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ProfileRepository>, directory: Arc<dyn DirectoryGateway>) -> Self {
        Self {
            ensure_profile: Arc::new(EnsureProfileUseCase::new(repo.clone(), directory.clone())),
            resolve_mutual_friends: Arc::new(ResolveMutualFriendsUseCase::new(
                repo.clone(),
                directory,
            )),
            search_profiles: Arc::new(SearchProfilesUseCase::new(repo.clone())),
            list_profiles: Arc::new(ListProfilesUseCase::new(repo.clone())),
            soft_delete_profile: Arc::new(SoftDeleteProfileUseCase::new(repo.clone())),
            update_profile: Arc::new(UpdateProfileUseCase::new(repo)),
        }
    }
}
