use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::hashtag::{extract_hashtags, normalize_tag};
use crate::model::{
    Comment, CommentWithUser, Follow, HashtagStat, Like, NewComment, NewUser, NewVideo, User,
    Video,
};
use crate::traits::FeedStore;

/// Volatile, process-local [`FeedStore`].
///
/// All tables live behind a single `RwLock`. Every mutation, together with
/// the counters it maintains, runs under one write guard, so readers only
/// ever see fully applied operations.
pub struct MemStore {
    tables: RwLock<Tables>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    videos: BTreeMap<i32, Video>,
    comments: BTreeMap<i32, Comment>,
    /// Keyed by `(user_id, video_id)`.
    likes: BTreeMap<(i32, i32), Like>,
    /// Keyed by `(follower_id, following_id)`.
    follows: BTreeMap<(i32, i32), Follow>,
    ids: IdSequences,
}

/// Last id handed out per entity kind. Ids start at 1 and are never reused.
#[derive(Default)]
struct IdSequences {
    user: i32,
    video: i32,
    comment: i32,
    like: i32,
    follow: i32,
}

fn next_id(seq: &mut i32) -> i32 {
    *seq += 1;
    *seq
}

/// Newest first; equal timestamps keep insertion (id) order.
fn newest_first(a: (DateTime<Utc>, i32), b: (DateTime<Utc>, i32)) -> Ordering {
    b.0.cmp(&a.0).then(a.1.cmp(&b.1))
}

fn sort_videos(videos: &mut [Video]) {
    videos.sort_by(|a, b| newest_first((a.created_at, a.id), (b.created_at, b.id)));
}

impl MemStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            clock,
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedStore for MemStore {
    async fn get_user(&self, id: i32) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> StoreResult<User> {
        if new_user.username.trim().is_empty() {
            return Err(StoreError::InvalidInput("username must not be empty".into()));
        }

        let mut guard = self.tables.write().await;
        let tables = &mut *guard;

        if tables.users.values().any(|u| u.username == new_user.username) {
            return Err(StoreError::UsernameTaken(new_user.username));
        }

        let user = User {
            id: next_id(&mut tables.ids.user),
            username: new_user.username,
            avatar: new_user.avatar,
            followers: 0,
            following: 0,
        };
        tables.users.insert(user.id, user.clone());
        debug!(user_id = user.id, username = %user.username, "User created");

        Ok(user)
    }

    async fn get_videos(&self, limit: usize, offset: usize) -> StoreResult<Vec<Video>> {
        let mut videos: Vec<Video> = self.tables.read().await.videos.values().cloned().collect();
        sort_videos(&mut videos);
        Ok(videos.into_iter().skip(offset).take(limit).collect())
    }

    async fn get_video(&self, id: i32) -> StoreResult<Option<Video>> {
        Ok(self.tables.read().await.videos.get(&id).cloned())
    }

    async fn get_videos_by_user(&self, user_id: i32) -> StoreResult<Vec<Video>> {
        let mut videos: Vec<Video> = self
            .tables
            .read()
            .await
            .videos
            .values()
            .filter(|v| v.user_id == user_id)
            .cloned()
            .collect();
        sort_videos(&mut videos);
        Ok(videos)
    }

    async fn create_video(&self, new_video: NewVideo) -> StoreResult<Video> {
        let mut guard = self.tables.write().await;
        let tables = &mut *guard;

        if !tables.users.contains_key(&new_video.user_id) {
            return Err(StoreError::user_not_found(new_video.user_id));
        }

        let video = Video {
            id: next_id(&mut tables.ids.video),
            user_id: new_video.user_id,
            video_url: new_video.video_url,
            thumbnail_url: new_video.thumbnail_url,
            description: new_video.description,
            music: new_video.music,
            likes: 0,
            comments: 0,
            shares: 0,
            created_at: self.clock.utc(),
        };
        tables.videos.insert(video.id, video.clone());
        debug!(video_id = video.id, user_id = video.user_id, "Video created");

        Ok(video)
    }

    async fn get_comments_by_video(&self, video_id: i32) -> StoreResult<Vec<CommentWithUser>> {
        let tables = self.tables.read().await;

        let mut comments: Vec<&Comment> = tables
            .comments
            .values()
            .filter(|c| c.video_id == video_id)
            .collect();
        comments.sort_by(|a, b| newest_first((a.created_at, a.id), (b.created_at, b.id)));

        comments
            .into_iter()
            .map(|comment| -> StoreResult<CommentWithUser> {
                let user = tables.users.get(&comment.user_id).cloned().ok_or_else(|| {
                    warn!(
                        comment_id = comment.id,
                        user_id = comment.user_id,
                        "Dangling comment author"
                    );
                    StoreError::Inconsistent(format!(
                        "comment {} references missing user {}",
                        comment.id, comment.user_id
                    ))
                })?;
                Ok(CommentWithUser {
                    comment: comment.clone(),
                    user,
                })
            })
            .collect()
    }

    async fn create_comment(&self, new_comment: NewComment) -> StoreResult<Comment> {
        let mut guard = self.tables.write().await;
        let tables = &mut *guard;

        if !tables.users.contains_key(&new_comment.user_id) {
            return Err(StoreError::user_not_found(new_comment.user_id));
        }
        let video = tables
            .videos
            .get_mut(&new_comment.video_id)
            .ok_or_else(|| StoreError::video_not_found(new_comment.video_id))?;

        let comment = Comment {
            id: next_id(&mut tables.ids.comment),
            video_id: new_comment.video_id,
            user_id: new_comment.user_id,
            text: new_comment.text,
            likes: 0,
            created_at: self.clock.utc(),
        };
        video.comments += 1;
        tables.comments.insert(comment.id, comment.clone());
        debug!(
            comment_id = comment.id,
            video_id = comment.video_id,
            comments = video.comments,
            "Comment created"
        );

        Ok(comment)
    }

    async fn is_video_liked(&self, user_id: i32, video_id: i32) -> StoreResult<bool> {
        Ok(self
            .tables
            .read()
            .await
            .likes
            .contains_key(&(user_id, video_id)))
    }

    async fn like_video(&self, user_id: i32, video_id: i32) -> StoreResult<bool> {
        let mut guard = self.tables.write().await;
        let tables = &mut *guard;

        if tables.likes.contains_key(&(user_id, video_id)) {
            return Ok(false);
        }
        if !tables.users.contains_key(&user_id) {
            return Err(StoreError::user_not_found(user_id));
        }
        let video = tables
            .videos
            .get_mut(&video_id)
            .ok_or_else(|| StoreError::video_not_found(video_id))?;

        let like = Like {
            id: next_id(&mut tables.ids.like),
            user_id,
            video_id,
            created_at: self.clock.utc(),
        };
        tables.likes.insert((user_id, video_id), like);
        video.likes += 1;
        debug!(user_id, video_id, likes = video.likes, "Video liked");

        Ok(true)
    }

    async fn unlike_video(&self, user_id: i32, video_id: i32) -> StoreResult<bool> {
        let mut guard = self.tables.write().await;
        let tables = &mut *guard;

        if tables.likes.remove(&(user_id, video_id)).is_none() {
            return Ok(false);
        }
        if let Some(video) = tables.videos.get_mut(&video_id) {
            video.likes = video.likes.saturating_sub(1);
            debug!(user_id, video_id, likes = video.likes, "Video unliked");
        }

        Ok(true)
    }

    async fn is_following(&self, follower_id: i32, following_id: i32) -> StoreResult<bool> {
        Ok(self
            .tables
            .read()
            .await
            .follows
            .contains_key(&(follower_id, following_id)))
    }

    async fn follow_user(&self, follower_id: i32, following_id: i32) -> StoreResult<bool> {
        if follower_id == following_id {
            return Ok(false);
        }

        let mut guard = self.tables.write().await;
        let tables = &mut *guard;

        if tables.follows.contains_key(&(follower_id, following_id)) {
            return Ok(false);
        }
        for id in [follower_id, following_id] {
            if !tables.users.contains_key(&id) {
                return Err(StoreError::user_not_found(id));
            }
        }

        let follow = Follow {
            id: next_id(&mut tables.ids.follow),
            follower_id,
            following_id,
            created_at: self.clock.utc(),
        };
        tables.follows.insert((follower_id, following_id), follow);
        if let Some(follower) = tables.users.get_mut(&follower_id) {
            follower.following += 1;
        }
        if let Some(followee) = tables.users.get_mut(&following_id) {
            followee.followers += 1;
        }
        debug!(follower_id, following_id, "User followed");

        Ok(true)
    }

    async fn unfollow_user(&self, follower_id: i32, following_id: i32) -> StoreResult<bool> {
        let mut guard = self.tables.write().await;
        let tables = &mut *guard;

        if tables.follows.remove(&(follower_id, following_id)).is_none() {
            return Ok(false);
        }
        if let Some(follower) = tables.users.get_mut(&follower_id) {
            follower.following = follower.following.saturating_sub(1);
        }
        if let Some(followee) = tables.users.get_mut(&following_id) {
            followee.followers = followee.followers.saturating_sub(1);
        }
        debug!(follower_id, following_id, "User unfollowed");

        Ok(true)
    }

    async fn trending_hashtags(&self, limit: usize) -> StoreResult<Vec<HashtagStat>> {
        let tables = self.tables.read().await;

        let mut stats: BTreeMap<String, HashtagStat> = BTreeMap::new();
        for video in tables.videos.values() {
            for tag in extract_hashtags(&video.description) {
                let stat = stats.entry(tag.clone()).or_insert(HashtagStat {
                    tag,
                    videos: 0,
                    likes: 0,
                });
                stat.videos += 1;
                stat.likes += u64::from(video.likes);
            }
        }

        let mut ranked: Vec<HashtagStat> = stats.into_values().collect();
        ranked.sort_by(|a, b| {
            b.likes
                .cmp(&a.likes)
                .then(b.videos.cmp(&a.videos))
                .then_with(|| a.tag.cmp(&b.tag))
        });
        ranked.truncate(limit);

        Ok(ranked)
    }

    async fn get_videos_by_hashtag(&self, tag: &str) -> StoreResult<Vec<Video>> {
        let tag = normalize_tag(tag)
            .ok_or_else(|| StoreError::InvalidInput(format!("'{tag}' is not a valid hashtag")))?;

        let mut videos: Vec<Video> = self
            .tables
            .read()
            .await
            .videos
            .values()
            .filter(|v| extract_hashtags(&v.description).contains(&tag))
            .cloned()
            .collect();
        sort_videos(&mut videos);

        Ok(videos)
    }
}
