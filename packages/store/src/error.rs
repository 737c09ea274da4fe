use std::fmt;

use thiserror::Error;

/// Entity kinds that can be looked up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Video,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("User"),
            Self::Video => f.write_str("Video"),
        }
    }
}

/// Errors raised by [`FeedStore`](crate::FeedStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i32 },

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A stored record points at an entity that no longer resolves.
    #[error("Referential inconsistency: {0}")]
    Inconsistent(String),
}

impl StoreError {
    pub fn user_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: EntityKind::User,
            id,
        }
    }

    pub fn video_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: EntityKind::Video,
            id,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
