use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use store::{CommentWithUser, FeedStore, Video};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{AppJson, AppPath, AppQuery};
use crate::models::shared::{require_id, validate_id};
use crate::models::video::*;
use crate::state::AppState;

/// Join a video with its creator.
pub(crate) async fn attach_creator(
    store: &dyn FeedStore,
    video: Video,
) -> Result<VideoWithUser, AppError> {
    let user = store.get_user(video.user_id).await?.ok_or_else(|| {
        AppError::Internal(format!(
            "video {} references missing user {}",
            video.id, video.user_id
        ))
    })?;
    Ok(VideoWithUser { video, user })
}

pub(crate) async fn attach_creators(
    store: &dyn FeedStore,
    videos: Vec<Video>,
) -> Result<Vec<VideoWithUser>, AppError> {
    let mut joined = Vec::with_capacity(videos.len());
    for video in videos {
        joined.push(attach_creator(store, video).await?);
    }
    Ok(joined)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Videos",
    operation_id = "listVideos",
    summary = "Get the video feed",
    description = "Returns videos newest first, each with its creator embedded. `limit` defaults to the configured page size and is clamped to the configured maximum.",
    params(VideoListQuery),
    responses(
        (status = 200, description = "Page of the feed", body = [VideoWithUser]),
        (status = 400, description = "Malformed query (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Internal error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_videos(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<VideoListQuery>,
) -> Result<Json<Vec<VideoWithUser>>, AppError> {
    let limit = state.config.feed.page_size(query.limit);
    let offset = query.offset.unwrap_or(0);

    let videos = state.store.get_videos(limit, offset).await?;
    Ok(Json(attach_creators(state.store.as_ref(), videos).await?))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Videos",
    operation_id = "getVideo",
    summary = "Get a video by ID",
    params(("id" = i32, Path, description = "Video ID")),
    responses(
        (status = 200, description = "Video with creator", body = VideoWithUser),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Video not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_video(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<VideoWithUser>, AppError> {
    let id = validate_id(id, "Video ID")?;

    let video = state
        .store
        .get_video(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".into()))?;

    Ok(Json(attach_creator(state.store.as_ref(), video).await?))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Videos",
    operation_id = "createVideo",
    summary = "Publish a video",
    description = "Creates a video owned by an existing user. Counters start at zero and `createdAt` is set by the server.",
    request_body = CreateVideoRequest,
    responses(
        (status = 201, description = "Video created", body = Video),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Owner not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn create_video(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateVideoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_video = validate_create_video(payload)?;
    let video = state.store.create_video(new_video).await?;

    Ok((StatusCode::CREATED, Json(video)))
}

#[utoipa::path(
    get,
    path = "/{id}/comments",
    tag = "Comments",
    operation_id = "listComments",
    summary = "List comments on a video",
    description = "Returns comments newest first, each with its author embedded. An unknown video has no comments.",
    params(("id" = i32, Path, description = "Video ID")),
    responses(
        (status = 200, description = "Comments", body = [CommentWithUser]),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Internal error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn list_comments(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Vec<CommentWithUser>>, AppError> {
    let id = validate_id(id, "Video ID")?;
    Ok(Json(state.store.get_comments_by_video(id).await?))
}

#[utoipa::path(
    post,
    path = "/{id}/comments",
    tag = "Comments",
    operation_id = "createComment",
    summary = "Comment on a video",
    description = "Creates a comment and increments the video's comment counter in the same step.",
    params(("id" = i32, Path, description = "Video ID")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = store::Comment),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Video or user not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn create_comment(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let video_id = validate_id(id, "Video ID")?;
    let new_comment = validate_create_comment(video_id, payload)?;
    let comment = state.store.create_comment(new_comment).await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    post,
    path = "/{id}/like",
    tag = "Likes",
    operation_id = "toggleLike",
    summary = "Like or unlike a video",
    description = "Flips the caller's like on the video and reports the resulting state. The store re-checks membership under its own lock, so concurrent toggles never double-count; the reported state may be stale if another toggle lands in between.",
    params(("id" = i32, Path, description = "Video ID")),
    request_body = LikeRequest,
    responses(
        (status = 200, description = "Resulting like state", body = LikeStatus),
        (status = 400, description = "Missing user ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Video or user not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn toggle_like(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<LikeRequest>,
) -> Result<Json<LikeStatus>, AppError> {
    let video_id = validate_id(id, "Video ID")?;
    let user_id = require_id(payload.user_id, "User ID")?;

    let liked = if state.store.is_video_liked(user_id, video_id).await? {
        state.store.unlike_video(user_id, video_id).await?;
        false
    } else {
        state.store.like_video(user_id, video_id).await?;
        true
    };

    Ok(Json(LikeStatus { liked }))
}

#[utoipa::path(
    get,
    path = "/{id}/like/{user_id}",
    tag = "Likes",
    operation_id = "getLikeStatus",
    summary = "Check whether a user liked a video",
    params(
        ("id" = i32, Path, description = "Video ID"),
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Like state", body = LikeStatus),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_like_status(
    State(state): State<AppState>,
    AppPath((id, user_id)): AppPath<(i32, i32)>,
) -> Result<Json<LikeStatus>, AppError> {
    let video_id = validate_id(id, "Video ID")?;
    let user_id = validate_id(user_id, "User ID")?;

    let liked = state.store.is_video_liked(user_id, video_id).await?;
    Ok(Json(LikeStatus { liked }))
}
