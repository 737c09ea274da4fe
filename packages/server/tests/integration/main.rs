mod common;

mod comments;
mod hashtags;
mod likes;
