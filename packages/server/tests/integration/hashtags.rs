use serde_json::json;

use crate::common::{TestApp, routes};

mod trending {
    use super::*;

    #[tokio::test]
    async fn tags_are_ranked_by_likes() {
        let app = TestApp::spawn_seeded().await;

        let res = app.get(&format!("{}?limit=3", routes::TRENDING)).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.body,
            json!([
                { "tag": "#dance", "videos": 1, "likes": 3 },
                { "tag": "#sunset", "videos": 1, "likes": 3 },
                { "tag": "#vibes", "videos": 1, "likes": 3 },
            ])
        );
    }

    #[tokio::test]
    async fn default_limit_caps_results() {
        let app = TestApp::spawn_seeded().await;

        let res = app.get(routes::TRENDING).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body.as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn no_videos_means_no_tags() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::TRENDING).await;

        assert_eq!(res.body, json!([]));
    }
}

mod by_tag {
    use super::*;

    #[tokio::test]
    async fn matching_is_case_insensitive() {
        let app = TestApp::spawn().await;
        let user = app.create_user("@maker").await;
        let tagged = app.create_video(user, "Leg day #Fitness").await;
        app.create_video(user, "no tags here").await;

        let res = app.get(&routes::hashtag_videos("fitness")).await;

        assert_eq!(res.status, 200);
        let videos = res.body.as_array().unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0]["id"], tagged);
        assert_eq!(videos[0]["user"]["username"], "@maker");
    }

    #[tokio::test]
    async fn invalid_tag_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::hashtag_videos("not-a-tag")).await;

        res.assert_error(400, "VALIDATION_ERROR");
    }
}
