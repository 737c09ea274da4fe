mod error;
mod mem;
mod traits;

pub mod hashtag;
pub mod model;
pub mod seed;

pub use error::{EntityKind, StoreError, StoreResult};
pub use mem::MemStore;
pub use model::{
    Comment, CommentWithUser, Follow, HashtagStat, Like, NewComment, NewUser, NewVideo, User,
    Video,
};
pub use traits::FeedStore;
