use serde_json::json;

use crate::common::{TestApp, routes};

mod toggling {
    use super::*;

    #[tokio::test]
    async fn like_then_unlike_restores_counter() {
        let app = TestApp::spawn_seeded().await;

        let res = app.post(&routes::like(3), &json!({ "userId": 6 })).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({ "liked": true }));
        assert_eq!(app.get(&routes::video(3)).await.body["likes"], 1);
        assert_eq!(
            app.get(&routes::like_status(3, 6)).await.body,
            json!({ "liked": true })
        );

        let res = app.post(&routes::like(3), &json!({ "userId": 6 })).await;
        assert_eq!(res.body, json!({ "liked": false }));
        assert_eq!(app.get(&routes::video(3)).await.body["likes"], 0);
        assert_eq!(
            app.get(&routes::like_status(3, 6)).await.body,
            json!({ "liked": false })
        );
    }

    #[tokio::test]
    async fn existing_like_is_removed_first() {
        let app = TestApp::spawn_seeded().await;

        let res = app.post(&routes::like(1), &json!({ "userId": 6 })).await;

        assert_eq!(res.body, json!({ "liked": false }));
        assert_eq!(app.get(&routes::video(1)).await.body["likes"], 2);
    }

    #[tokio::test]
    async fn missing_user_id_is_rejected() {
        let app = TestApp::spawn_seeded().await;

        let res = app.post(&routes::like(1), &json!({})).await;

        res.assert_error(400, "VALIDATION_ERROR");
        assert_eq!(res.body["message"], "User ID required");
    }

    #[tokio::test]
    async fn unknown_video_is_not_found() {
        let app = TestApp::spawn_seeded().await;

        let res = app.post(&routes::like(404), &json!({ "userId": 1 })).await;

        res.assert_error(404, "NOT_FOUND");
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let app = TestApp::spawn_seeded().await;

        let res = app.post(&routes::like(1), &json!({ "userId": 404 })).await;

        res.assert_error(404, "NOT_FOUND");
        assert_eq!(app.get(&routes::video(1)).await.body["likes"], 3);
    }
}

mod status {
    use super::*;

    #[tokio::test]
    async fn unknown_pair_is_not_liked() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::like_status(8, 9)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({ "liked": false }));
    }

    #[tokio::test]
    async fn non_numeric_user_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get("/api/videos/1/like/someone").await;

        res.assert_error(400, "VALIDATION_ERROR");
    }
}
