#![allow(dead_code)]

use mm_auth::{CredentialStore, MemoryCredentialStore};
use mm_client::{MoodMuse, RecordingNavigator};
use mm_config::{Config, IdentityStrategy};

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::MockServer;

pub struct Harness {
    pub server: MockServer,
    pub store: Arc<MemoryCredentialStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub app: MoodMuse,
}

pub async fn harness(token: Option<&str>) -> Harness {
    harness_with(token, IdentityStrategy::Remote).await
}

pub async fn harness_with(token: Option<&str>, strategy: IdentityStrategy) -> Harness {
    let server = MockServer::start().await;

    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.session.identity_strategy = strategy;

    let store = Arc::new(match token {
        Some(token) => MemoryCredentialStore::with_token(token),
        None => MemoryCredentialStore::new(),
    });
    let navigator = Arc::new(RecordingNavigator::new());
    let app = MoodMuse::with_store(config, store.clone(), navigator.clone()).unwrap();

    Harness {
        server,
        store,
        navigator,
        app,
    }
}

impl Harness {
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }
}

pub fn user_json(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{username}@example.com"),
        "created_at": "2024-05-01T10:00:00",
        "profile_image_url": null,
        "bio": null
    })
}

pub fn entry_json(id: i64) -> Value {
    json!({
        "id": id,
        "text_input": "A calm and quiet afternoon by the sea",
        "mood_label": "calm",
        "created_at": "2024-05-01T10:00:00.123456",
        "suggestions": [
            {"id": id * 10, "suggestion_type": "color", "content": "#A0C4FF, #BDB2FF"},
            {"id": id * 10 + 1, "suggestion_type": "music", "content": "https://open.spotify.com/playlist/1"},
            {"id": id * 10 + 2, "suggestion_type": "quote", "content": "Be still."}
        ]
    })
}

pub fn history_json(ids: impl IntoIterator<Item = i64>, total_entries: u64, limit: u32) -> Value {
    let data: Vec<Value> = ids.into_iter().map(entry_json).collect();
    json!({
        "data": data,
        "total_entries": total_entries,
        "limit": limit
    })
}
