use serde::{Deserialize, Serialize};
use store::{NewUser, User, Video};

use super::shared::require_text;
use crate::error::AppError;

/// Request body for signing up.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    /// Unique handle (1-32 characters, no whitespace).
    #[schema(example = "@travel_sarah")]
    pub username: String,
    /// Avatar image URI.
    pub avatar: String,
}

pub fn validate_create_user(payload: CreateUserRequest) -> Result<NewUser, AppError> {
    let username = require_text(&payload.username, "username", 32)?;
    if username.chars().any(char::is_whitespace) {
        return Err(AppError::Validation(
            "username must not contain whitespace".into(),
        ));
    }
    Ok(NewUser {
        username,
        avatar: require_text(&payload.avatar, "avatar", 2048)?,
    })
}

/// A user together with the videos they published, newest first.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: User,
    pub videos: Vec<Video>,
}

/// Request body for toggling a follow on the user in the path.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    #[schema(example = 6)]
    pub follower_id: Option<i32>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct FollowStatus {
    pub following: bool,
}
