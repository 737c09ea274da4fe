use serde::{Deserialize, Serialize};
use store::{NewComment, NewVideo, User, Video};

use super::shared::{require_id, require_text, validate_id};
use crate::error::AppError;

const MAX_URL_CHARS: usize = 2048;
const MAX_DESCRIPTION_CHARS: usize = 2200;
const MAX_MUSIC_CHARS: usize = 256;
const MAX_COMMENT_CHARS: usize = 1000;

/// Request body for publishing a video.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    /// Owner of the video.
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = "https://storage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4")]
    pub video_url: String,
    pub thumbnail_url: String,
    #[schema(example = "Sunset vibes in the city #dance #sunset")]
    pub description: String,
    #[schema(example = "Original Sound - sophia_dance")]
    pub music: String,
}

pub fn validate_create_video(payload: CreateVideoRequest) -> Result<NewVideo, AppError> {
    Ok(NewVideo {
        user_id: validate_id(payload.user_id, "User ID")?,
        video_url: require_text(&payload.video_url, "videoUrl", MAX_URL_CHARS)?,
        thumbnail_url: require_text(&payload.thumbnail_url, "thumbnailUrl", MAX_URL_CHARS)?,
        description: require_text(&payload.description, "description", MAX_DESCRIPTION_CHARS)?,
        music: require_text(&payload.music, "music", MAX_MUSIC_CHARS)?,
    })
}

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VideoListQuery {
    /// Maximum number of videos to return.
    pub limit: Option<usize>,
    /// Number of videos to skip.
    pub offset: Option<usize>,
}

/// A video together with its creator.
#[derive(Serialize, utoipa::ToSchema)]
pub struct VideoWithUser {
    #[serde(flatten)]
    pub video: Video,
    pub user: User,
}

/// Request body for commenting on a video.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[schema(example = "What's the song name?")]
    pub text: String,
    #[schema(example = 4)]
    pub user_id: Option<i32>,
}

pub fn validate_create_comment(
    video_id: i32,
    payload: CreateCommentRequest,
) -> Result<NewComment, AppError> {
    Ok(NewComment {
        video_id,
        user_id: require_id(payload.user_id, "User ID")?,
        text: require_text(&payload.text, "text", MAX_COMMENT_CHARS)?,
    })
}

/// Request body for toggling a like.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    #[schema(example = 6)]
    pub user_id: Option<i32>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LikeStatus {
    pub liked: bool,
}
