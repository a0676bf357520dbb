// crates/profile/src/infrastructure/api/http/handlers.rs

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared_kernel::domain::value_objects::Login;

use crate::application::ensure_profile::EnsureProfileCommand;
use crate::application::list_profiles::ListProfilesCommand;
use crate::application::resolve_mutual_friends::ResolveMutualFriendsCommand;
use crate::application::search_profiles::SearchProfilesCommand;
use crate::application::soft_delete_profile::SoftDeleteProfileCommand;
use crate::application::update_profile::UpdateProfileCommand;
use crate::domain::params::SortField;
use crate::infrastructure::api::http::dto::{
    AddUserRequest, ListUsersQuery, MessageResponse, SearchUsersQuery, UpdateUserRequest,
};
use crate::infrastructure::api::http::error_mapper::ApiError;
use crate::infrastructure::api::http::AppState;

/// POST /api/users : renvoie le profil stocké (200) ou fraîchement créé (201)
pub async fn add_user(
    State(state): State<AppState>,
    Json(body): Json<AddUserRequest>,
) -> Result<Response, ApiError> {
    let username = Login::try_new(body.username)?;

    let outcome = state
        .ensure_profile
        .execute(EnsureProfileCommand { username })
        .await?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(outcome.profile)).into_response())
}

/// GET /api/users?sortBy=field : tous les profils actifs, tri croissant
pub async fn get_all_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Response, ApiError> {
    let sort = SortField::parse(query.sort_by.as_deref())?;

    let profiles = state
        .list_profiles
        .execute(ListProfilesCommand::new(sort))
        .await?;

    Ok(Json(profiles).into_response())
}

/// GET /api/users/search?username=&location= : sous-chaîne, insensible à la casse
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchUsersQuery>,
) -> Result<Response, ApiError> {
    let profiles = state
        .search_profiles
        .execute(SearchProfilesCommand {
            username: query.username,
            location: query.location,
        })
        .await?;

    Ok(Json(profiles).into_response())
}

/// GET /api/users/mutual-friends/:username : recalcule et renvoie les amis
pub async fn get_mutual_friends(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response, ApiError> {
    let username = Login::try_new(username)?;

    let friends = state
        .resolve_mutual_friends
        .execute(ResolveMutualFriendsCommand { username })
        .await?;

    Ok(Json(friends).into_response())
}

/// DELETE /api/users/:username : pose le tombstone, l'enregistrement reste
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response, ApiError> {
    let username = Login::try_new(username)?;

    state
        .soft_delete_profile
        .execute(SoftDeleteProfileCommand { username })
        .await?;

    Ok(Json(MessageResponse {
        message: "User soft deleted successfully",
    })
    .into_response())
}

/// PUT /api/users/:username : patch partiel des champs mutables
pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Response, ApiError> {
    let username = Login::try_new(username)?;

    let profile = state
        .update_profile
        .execute(UpdateProfileCommand {
            username,
            patch: body.into(),
        })
        .await?;

    Ok(Json(profile).into_response())
}
