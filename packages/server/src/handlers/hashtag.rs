use axum::Json;
use axum::extract::State;
use store::HashtagStat;
use tracing::instrument;

use super::video::attach_creators;
use crate::error::{AppError, ErrorBody};
use crate::extractors::{AppPath, AppQuery};
use crate::models::hashtag::TrendingQuery;
use crate::models::video::VideoWithUser;
use crate::state::AppState;

const DEFAULT_TRENDING: usize = 10;
const MAX_TRENDING: usize = 50;

#[utoipa::path(
    get,
    path = "/trending",
    tag = "Hashtags",
    operation_id = "trendingHashtags",
    summary = "List trending hashtags",
    description = "Hashtags found in video descriptions, ranked by the total likes of the videos carrying them.",
    params(TrendingQuery),
    responses(
        (status = 200, description = "Ranked hashtags", body = [HashtagStat]),
        (status = 400, description = "Malformed query (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn trending_hashtags(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TrendingQuery>,
) -> Result<Json<Vec<HashtagStat>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_TRENDING).clamp(1, MAX_TRENDING);
    Ok(Json(state.store.trending_hashtags(limit).await?))
}

#[utoipa::path(
    get,
    path = "/{tag}/videos",
    tag = "Hashtags",
    operation_id = "listHashtagVideos",
    summary = "List videos carrying a hashtag",
    description = "Matching is case-insensitive and the leading `#` is optional.",
    params(("tag" = String, Path, description = "Hashtag, e.g. `dance`")),
    responses(
        (status = 200, description = "Videos newest first", body = [VideoWithUser]),
        (status = 400, description = "Not a valid hashtag (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn hashtag_videos(
    State(state): State<AppState>,
    AppPath(tag): AppPath<String>,
) -> Result<Json<Vec<VideoWithUser>>, AppError> {
    let videos = state.store.get_videos_by_hashtag(&tag).await?;
    Ok(Json(attach_creators(state.store.as_ref(), videos).await?))
}
