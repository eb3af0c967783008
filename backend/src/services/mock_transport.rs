//! In-memory stand-in for the YouTube Data API used by tests.

use crate::config::{ConfigChain, EnvSource, SecretStore};
use crate::error::AppError;
use crate::services::cache::ResponseCache;
use crate::services::youtube_service::{
    ApiResponse, YoutubeClient, YoutubeTransport, CATEGORIES_ENDPOINT, CHANNELS_ENDPOINT,
    VIDEOS_ENDPOINT,
};
use crate::AppState;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: String,
    pub query: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

type Responder = Box<dyn Fn(&RecordedCall) -> Result<ApiResponse, AppError> + Send + Sync>;

/// Records every request and answers it with `responder`.
pub struct MockTransport {
    responder: Responder,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new(
        responder: impl Fn(&RecordedCall) -> Result<ApiResponse, AppError> + Send + Sync + 'static,
    ) -> Self {
        MockTransport {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answers all three endpoints with small canned payloads.
    pub fn youtube() -> Self {
        Self::new(Self::youtube_response)
    }

    pub fn youtube_response(call: &RecordedCall) -> Result<ApiResponse, AppError> {
        match call.endpoint.as_str() {
            VIDEOS_ENDPOINT => Ok(Self::json(json!({
                "items": [
                    {
                        "id": "video-1",
                        "snippet": {
                            "title": "First trending video",
                            "channelId": "UC-alpha",
                            "channelTitle": "Alpha",
                            "thumbnails": {
                                "high": { "url": "https://i.ytimg.com/vi/video-1/hqdefault.jpg" }
                            }
                        },
                        "statistics": {
                            "viewCount": "123456789",
                            "likeCount": "15000",
                            "commentCount": "9999"
                        }
                    },
                    {
                        "id": "video-2",
                        "snippet": {
                            "title": "Second trending video",
                            "channelId": "UC-hidden",
                            "channelTitle": "Hidden subscribers"
                        },
                        "statistics": { "viewCount": "500" }
                    }
                ]
            }))),
            CATEGORIES_ENDPOINT => Ok(Self::json(json!({
                "items": [
                    { "id": "10", "snippet": { "title": "Music", "assignable": true } },
                    { "id": "18", "snippet": { "title": "Short Movies", "assignable": false } }
                ]
            }))),
            CHANNELS_ENDPOINT => {
                let items: Vec<Value> = call
                    .param("id")
                    .unwrap_or_default()
                    .split(',')
                    .filter(|id| !id.is_empty() && *id != "UC-hidden")
                    .map(|id| json!({ "id": id, "statistics": { "subscriberCount": "2500000" } }))
                    .collect();
                Ok(Self::json(json!({ "items": items })))
            }
            other => Ok(Self::status(404, &format!("unknown endpoint {other}"))),
        }
    }

    pub fn json(body: Value) -> ApiResponse {
        Self::json_status(200, body)
    }

    pub fn json_status(status: u16, body: Value) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn calls_to(&self, endpoint: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.endpoint == endpoint)
            .collect()
    }
}

#[rocket::async_trait]
impl YoutubeTransport for MockTransport {
    async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<ApiResponse, AppError> {
        let call = RecordedCall {
            endpoint: endpoint.to_string(),
            query: query
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
        };
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.clone());
        }
        (self.responder)(&call)
    }
}

/// App state wired to `transport`, with configuration from `env` only.
pub fn test_state(transport: Arc<MockTransport>, env: &[(&str, &str)]) -> AppState {
    AppState {
        config: ConfigChain::layered(SecretStore::default(), EnvSource::fixed(env)),
        youtube: YoutubeClient::new(transport),
        cache: ResponseCache::new(),
    }
}
