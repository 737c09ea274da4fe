pub mod hashtag;
pub mod user;
pub mod video;

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}
