pub mod hashtag;
pub mod shared;
pub mod user;
pub mod video;
