use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::Client;
use serde_json::{Value, json};

use server::config::{AppConfig, CorsConfig, FeedConfig, ServerConfig};
use server::state::AppState;
use store::{FeedStore, MemStore};

pub mod routes {
    pub const VIDEOS: &str = "/api/videos";
    pub const USERS: &str = "/api/users";
    pub const TRENDING: &str = "/api/hashtags/trending";
    pub const HEALTH: &str = "/health";
    pub const OPENAPI: &str = "/api-docs/openapi.json";

    pub fn video(id: i32) -> String {
        format!("/api/videos/{id}")
    }

    pub fn comments(video_id: i32) -> String {
        format!("/api/videos/{video_id}/comments")
    }

    pub fn like(video_id: i32) -> String {
        format!("/api/videos/{video_id}/like")
    }

    pub fn like_status(video_id: i32, user_id: i32) -> String {
        format!("/api/videos/{video_id}/like/{user_id}")
    }

    pub fn user(id: i32) -> String {
        format!("/api/users/{id}")
    }

    pub fn follow(user_id: i32) -> String {
        format!("/api/users/{user_id}/follow")
    }

    pub fn follow_status(user_id: i32, follower_id: i32) -> String {
        format!("/api/users/{user_id}/follow/{follower_id}")
    }

    pub fn hashtag_videos(tag: &str) -> String {
        format!("/api/hashtags/{tag}/videos")
    }
}

/// A running test server.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<dyn FeedStore>,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    /// Spawn a server over an empty store.
    pub async fn spawn() -> Self {
        Self::spawn_with(FeedConfig {
            seed_fixtures: false,
            ..Default::default()
        })
        .await
    }

    /// Spawn a server over a store populated with the demo fixtures.
    pub async fn spawn_seeded() -> Self {
        let app = Self::spawn().await;
        store::seed::seed_fixtures(app.store.as_ref())
            .await
            .expect("Failed to seed fixtures");
        app
    }

    pub async fn spawn_with(feed: FeedConfig) -> Self {
        let store: Arc<dyn FeedStore> = Arc::new(MemStore::new());

        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            feed,
        };

        let state = AppState {
            store: store.clone(),
            config: app_config,
        };

        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    /// POST a raw, possibly malformed, JSON body.
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    /// Sign up a user and return its id.
    pub async fn create_user(&self, username: &str) -> i32 {
        let res = self
            .post(
                routes::USERS,
                &json!({ "username": username, "avatar": "https://example.com/a.png" }),
            )
            .await;
        assert_eq!(res.status, 201, "create_user failed: {}", res.text);
        res.id()
    }

    /// Publish a video for `user_id` and return its id.
    pub async fn create_video(&self, user_id: i32, description: &str) -> i32 {
        let res = self
            .post(
                routes::VIDEOS,
                &json!({
                    "userId": user_id,
                    "videoUrl": "https://example.com/v.mp4",
                    "thumbnailUrl": "https://example.com/t.jpg",
                    "description": description,
                    "music": "Original Sound",
                }),
            )
            .await;
        assert_eq!(res.status, 201, "create_video failed: {}", res.text);
        res.id()
    }
}

impl TestResponse {
    async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.expect("Failed to read response body");
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> i32 {
        self.body["id"].as_i64().expect("response has no id") as i32
    }

    /// Assert the response is a JSON error with the given status and code.
    pub fn assert_error(&self, status: u16, code: &str) {
        assert_eq!(self.status, status, "unexpected status: {}", self.text);
        assert_eq!(self.body["code"], code, "unexpected body: {}", self.text);
    }
}
