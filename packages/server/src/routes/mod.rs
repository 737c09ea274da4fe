use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::{hashtag, user, video};
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/videos", video_routes())
        .nest("/users", user_routes())
        .nest("/hashtags", hashtag_routes())
}

fn video_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(video::list_videos, video::create_video))
        .routes(routes!(video::get_video))
        .routes(routes!(video::list_comments, video::create_comment))
        .routes(routes!(video::toggle_like))
        .routes(routes!(video::get_like_status))
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(user::create_user))
        .routes(routes!(user::get_user))
        .routes(routes!(user::toggle_follow))
        .routes(routes!(user::get_follow_status))
}

fn hashtag_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(hashtag::trending_hashtags))
        .routes(routes!(hashtag::hashtag_videos))
}
