use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A creator or viewer account.
///
/// `followers` and `following` mirror the number of [`Follow`] records that
/// point at / originate from this user. Only follow operations change them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "@sophia_dance")]
    pub username: String,
    pub avatar: String,
    pub followers: u32,
    pub following: u32,
}

/// A short video in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[schema(example = 1)]
    pub id: i32,
    pub user_id: i32,
    pub video_url: String,
    pub thumbnail_url: String,
    #[schema(example = "Sunset vibes in the city #dance #sunset")]
    pub description: String,
    pub music: String,
    /// Number of [`Like`] records referencing this video.
    pub likes: u32,
    /// Number of [`Comment`] records referencing this video.
    pub comments: u32,
    pub shares: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub video_id: i32,
    pub user_id: i32,
    pub text: String,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
}

/// Membership record: `user_id` liked `video_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: i32,
    pub user_id: i32,
    pub video_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Membership record: `follower_id` follows `following_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub id: i32,
    pub follower_id: i32,
    pub following_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub user_id: i32,
    pub video_url: String,
    pub thumbnail_url: String,
    pub description: String,
    pub music: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub video_id: i32,
    pub user_id: i32,
    pub text: String,
}

/// A comment joined with its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CommentWithUser {
    #[serde(flatten)]
    pub comment: Comment,
    pub user: User,
}

/// Aggregated usage of one hashtag across all video descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HashtagStat {
    /// Lowercased tag including the leading `#`.
    #[schema(example = "#dance")]
    pub tag: String,
    /// Number of videos carrying the tag.
    pub videos: u32,
    /// Sum of likes over those videos.
    pub likes: u64,
}
