use async_trait::async_trait;

use crate::error::StoreResult;
use crate::model::{
    Comment, CommentWithUser, HashtagStat, NewComment, NewUser, NewVideo, User, Video,
};

/// Data-access contract of the feed.
///
/// Implementations own id assignment and keep every derived counter
/// (`User::followers`, `User::following`, `Video::likes`, `Video::comments`)
/// equal to the cardinality of the records it mirrors. A membership write
/// and its counter update are never observable separately.
#[async_trait]
pub trait FeedStore: Send + Sync {
    async fn get_user(&self, id: i32) -> StoreResult<Option<User>>;

    /// Exact match on username; the oldest user wins if several match.
    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Create a user with zeroed follow counters.
    ///
    /// Fails with `UsernameTaken` if the username is already in use.
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;

    /// Newest videos first, skipping `offset` and returning at most `limit`.
    async fn get_videos(&self, limit: usize, offset: usize) -> StoreResult<Vec<Video>>;

    async fn get_video(&self, id: i32) -> StoreResult<Option<Video>>;

    async fn get_videos_by_user(&self, user_id: i32) -> StoreResult<Vec<Video>>;

    /// Create a video owned by an existing user, stamped with the current time.
    async fn create_video(&self, video: NewVideo) -> StoreResult<Video>;

    /// Comments on a video, newest first, each joined with its author.
    async fn get_comments_by_video(&self, video_id: i32) -> StoreResult<Vec<CommentWithUser>>;

    /// Create a comment and bump the parent video's comment counter.
    async fn create_comment(&self, comment: NewComment) -> StoreResult<Comment>;

    async fn is_video_liked(&self, user_id: i32, video_id: i32) -> StoreResult<bool>;

    /// Record a like. Returns `false` if the pair was already liked.
    async fn like_video(&self, user_id: i32, video_id: i32) -> StoreResult<bool>;

    /// Remove a like. Returns `false` if there was nothing to remove.
    async fn unlike_video(&self, user_id: i32, video_id: i32) -> StoreResult<bool>;

    async fn is_following(&self, follower_id: i32, following_id: i32) -> StoreResult<bool>;

    /// Record a follow. Returns `false` for an existing follow or a self-follow.
    async fn follow_user(&self, follower_id: i32, following_id: i32) -> StoreResult<bool>;

    /// Remove a follow. Returns `false` if there was nothing to remove.
    async fn unfollow_user(&self, follower_id: i32, following_id: i32) -> StoreResult<bool>;

    /// Most liked hashtags across all video descriptions.
    async fn trending_hashtags(&self, limit: usize) -> StoreResult<Vec<HashtagStat>>;

    /// Videos whose description carries `tag`, newest first.
    async fn get_videos_by_hashtag(&self, tag: &str) -> StoreResult<Vec<Video>>;
}
