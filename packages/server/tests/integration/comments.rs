use serde_json::json;

use crate::common::{TestApp, routes};

mod listing {
    use super::*;

    #[tokio::test]
    async fn comments_embed_their_author() {
        let app = TestApp::spawn_seeded().await;

        let res = app.get(&routes::comments(1)).await;

        assert_eq!(res.status, 200);
        let comments = res.body.as_array().unwrap();
        assert_eq!(comments.len(), 3);
        for comment in comments {
            assert_eq!(comment["videoId"], 1);
            assert_eq!(comment["userId"], comment["user"]["id"]);
        }
    }

    #[tokio::test]
    async fn newest_comment_comes_first() {
        let app = TestApp::spawn().await;
        let user = app.create_user("@chatty").await;
        let video = app.create_video(user, "talk to me").await;
        for text in ["first", "second"] {
            let res = app
                .post(&routes::comments(video), &json!({ "text": text, "userId": user }))
                .await;
            assert_eq!(res.status, 201);
        }

        let res = app.get(&routes::comments(video)).await;

        assert_eq!(res.body[0]["text"], "second");
        assert_eq!(res.body[1]["text"], "first");
    }

    #[tokio::test]
    async fn unknown_video_has_no_comments() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::comments(77)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }
}

mod posting {
    use super::*;

    #[tokio::test]
    async fn comment_increments_video_counter() {
        let app = TestApp::spawn().await;
        let user = app.create_user("@chatty").await;
        let video = app.create_video(user, "talk to me").await;

        let res = app
            .post(
                &routes::comments(video),
                &json!({ "text": "  nice one  ", "userId": user }),
            )
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["videoId"], video);
        assert_eq!(res.body["text"], "nice one");
        assert_eq!(res.body["likes"], 0);

        let video = app.get(&routes::video(video)).await;
        assert_eq!(video.body["comments"], 1);
    }

    #[tokio::test]
    async fn missing_user_id_is_rejected() {
        let app = TestApp::spawn_seeded().await;

        let res = app.post(&routes::comments(1), &json!({ "text": "hi" })).await;

        res.assert_error(400, "VALIDATION_ERROR");
        assert_eq!(res.body["message"], "User ID required");
    }

    #[tokio::test]
    async fn empty_text_is_rejected() {
        let app = TestApp::spawn_seeded().await;

        let res = app
            .post(&routes::comments(1), &json!({ "text": "", "userId": 2 }))
            .await;

        res.assert_error(400, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn unknown_video_is_not_found() {
        let app = TestApp::spawn().await;
        let user = app.create_user("@chatty").await;

        let res = app
            .post(&routes::comments(5), &json!({ "text": "hi", "userId": user }))
            .await;

        res.assert_error(404, "NOT_FOUND");
    }

    #[tokio::test]
    async fn unknown_author_is_not_found() {
        let app = TestApp::spawn_seeded().await;

        let res = app
            .post(&routes::comments(1), &json!({ "text": "hi", "userId": 99 }))
            .await;

        res.assert_error(404, "NOT_FOUND");
        let video = app.get(&routes::video(1)).await;
        assert_eq!(video.body["comments"], 3);
    }
}
