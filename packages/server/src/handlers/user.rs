use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use store::User;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{AppJson, AppPath};
use crate::models::shared::{require_id, validate_id};
use crate::models::user::*;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Users",
    operation_id = "createUser",
    summary = "Sign up",
    description = "Creates a user with zeroed follow counters. Usernames are unique.",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Username already taken (USERNAME_TAKEN)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_user = validate_create_user(payload)?;
    let user = state.store.create_user(new_user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    operation_id = "getUser",
    summary = "Get a user profile",
    description = "Returns the user with their published videos, newest first.",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile", body = UserProfile),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "User not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<UserProfile>, AppError> {
    let id = validate_id(id, "User ID")?;

    let user = state
        .store
        .get_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    let videos = state.store.get_videos_by_user(id).await?;

    Ok(Json(UserProfile { user, videos }))
}

#[utoipa::path(
    post,
    path = "/{id}/follow",
    tag = "Follows",
    operation_id = "toggleFollow",
    summary = "Follow or unfollow a user",
    description = "Flips whether `followerId` follows the user in the path and reports the resulting state. Following yourself is rejected.",
    params(("id" = i32, Path, description = "ID of the user being followed")),
    request_body = FollowRequest,
    responses(
        (status = 200, description = "Resulting follow state", body = FollowStatus),
        (status = 400, description = "Missing follower or self-follow (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "User not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn toggle_follow(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<FollowRequest>,
) -> Result<Json<FollowStatus>, AppError> {
    let following_id = validate_id(id, "User ID")?;
    let follower_id = require_id(payload.follower_id, "Follower ID")?;

    if follower_id == following_id {
        return Err(AppError::Validation("Users cannot follow themselves".into()));
    }

    let following = if state.store.is_following(follower_id, following_id).await? {
        state.store.unfollow_user(follower_id, following_id).await?;
        false
    } else {
        state.store.follow_user(follower_id, following_id).await?;
        true
    };

    Ok(Json(FollowStatus { following }))
}

#[utoipa::path(
    get,
    path = "/{id}/follow/{follower_id}",
    tag = "Follows",
    operation_id = "getFollowStatus",
    summary = "Check whether one user follows another",
    params(
        ("id" = i32, Path, description = "ID of the user being followed"),
        ("follower_id" = i32, Path, description = "ID of the prospective follower"),
    ),
    responses(
        (status = 200, description = "Follow state", body = FollowStatus),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_follow_status(
    State(state): State<AppState>,
    AppPath((id, follower_id)): AppPath<(i32, i32)>,
) -> Result<Json<FollowStatus>, AppError> {
    let following_id = validate_id(id, "User ID")?;
    let follower_id = validate_id(follower_id, "Follower ID")?;

    let following = state.store.is_following(follower_id, following_id).await?;
    Ok(Json(FollowStatus { following }))
}
