use crate::error::AppError;
use crate::models::{
    Category, CategoryItem, CategoryListResponse, CategoryQuery, ChannelListResponse,
    SubscriberQuery, Video, VideoListResponse, VideoQuery,
};
use frontend::models::ALL_CATEGORIES;
use log::{info, warn};
use reqwest::Client;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const VIDEOS_ENDPOINT: &str = "videos";
pub const CHANNELS_ENDPOINT: &str = "channels";
pub const CATEGORIES_ENDPOINT: &str = "videoCategories";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
/// `channels.list` accepts at most 50 ids per call.
pub const CHANNEL_BATCH_SIZE: usize = 50;
const ERROR_SNIPPET_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Issues one GET against a YouTube Data API endpoint.
#[rocket::async_trait]
pub trait YoutubeTransport: Send + Sync {
    async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<ApiResponse, AppError>;
}

pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpTransport { client, base_url })
    }
}

#[rocket::async_trait]
impl YoutubeTransport for HttpTransport {
    async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<ApiResponse, AppError> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| AppError::Config(format!("잘못된 API 주소: {e}")))?;

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}

/// Error detail of a non-200 response: the JSON body when it parses,
/// otherwise the start of the raw text.
pub fn error_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json.to_string(),
        Err(_) => body.chars().take(ERROR_SNIPPET_CHARS).collect(),
    }
}

pub fn assignable_categories(items: Vec<CategoryItem>) -> Vec<Category> {
    items
        .into_iter()
        .filter(|item| item.snippet.assignable)
        .filter_map(|item| match (item.id, item.snippet.title) {
            (Some(id), Some(title)) if !id.is_empty() && !title.is_empty() => {
                Some(Category { id, title })
            }
            _ => None,
        })
        .collect()
}

/// Splits channel ids into `channels.list` batches, dropping empty and
/// repeated ids while keeping first-seen order.
pub fn channel_batches(channel_ids: &[String]) -> Vec<Vec<String>> {
    let mut seen = HashSet::new();
    let unique: Vec<String> = channel_ids
        .iter()
        .filter(|id| !id.is_empty() && seen.insert(id.as_str()))
        .cloned()
        .collect();

    unique
        .chunks(CHANNEL_BATCH_SIZE)
        .map(<[String]>::to_vec)
        .collect()
}

#[derive(Clone)]
pub struct YoutubeClient {
    transport: Arc<dyn YoutubeTransport>,
}

impl YoutubeClient {
    pub fn new(transport: Arc<dyn YoutubeTransport>) -> Self {
        YoutubeClient { transport }
    }

    pub async fn fetch_popular_videos(&self, query: &VideoQuery) -> Result<Vec<Video>, AppError> {
        let mut params = vec![
            ("part", "snippet,statistics".to_string()),
            ("chart", "mostPopular".to_string()),
            ("maxResults", query.max_results.to_string()),
            ("regionCode", query.region_code.clone()),
            ("key", query.api_key.clone()),
        ];
        if !query.category_id.is_empty() && query.category_id != ALL_CATEGORIES {
            params.push(("videoCategoryId", query.category_id.clone()));
        }

        info!(
            "Fetching popular videos: region={} category={} max_results={}",
            query.region_code, query.category_id, query.max_results
        );
        let response = self.transport.get(VIDEOS_ENDPOINT, &params).await?;
        if response.status != 200 {
            return Err(AppError::Api {
                status: response.status,
                detail: error_detail(&response.body),
            });
        }

        let data: VideoListResponse = serde_json::from_str(&response.body)?;
        data.items.ok_or(AppError::MissingItems)
    }

    pub async fn fetch_categories(&self, query: &CategoryQuery) -> Result<Vec<Category>, AppError> {
        let params = [
            ("part", "snippet".to_string()),
            ("regionCode", query.region_code.clone()),
            ("key", query.api_key.clone()),
        ];

        let response = self.transport.get(CATEGORIES_ENDPOINT, &params).await?;
        if response.status != 200 {
            return Err(AppError::Api {
                status: response.status,
                detail: error_detail(&response.body),
            });
        }

        let data: CategoryListResponse = serde_json::from_str(&response.body)?;
        Ok(assignable_categories(data.items))
    }

    /// Channel id -> subscriber count. Batches that fail are skipped; the
    /// lookup only enriches the listing.
    pub async fn fetch_subscribers(&self, query: &SubscriberQuery) -> HashMap<String, String> {
        let mut result = HashMap::new();

        for batch in channel_batches(&query.channel_ids) {
            let params = [
                ("part", "statistics".to_string()),
                ("id", batch.join(",")),
                ("key", query.api_key.clone()),
                ("maxResults", CHANNEL_BATCH_SIZE.to_string()),
            ];

            let response = match self.transport.get(CHANNELS_ENDPOINT, &params).await {
                Ok(response) if response.status == 200 => response,
                Ok(response) => {
                    warn!(
                        "Skipping channel batch of {} ids: status {}",
                        batch.len(),
                        response.status
                    );
                    continue;
                }
                Err(e) => {
                    warn!("Skipping channel batch of {} ids: {e}", batch.len());
                    continue;
                }
            };

            match serde_json::from_str::<ChannelListResponse>(&response.body) {
                Ok(data) => {
                    for channel in data.items {
                        if let Some(subscribers) = channel.statistics.subscriber_count {
                            if !channel.id.is_empty() {
                                result.insert(channel.id, subscribers);
                            }
                        }
                    }
                }
                Err(e) => warn!("Failed to parse channel statistics: {e}"),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_transport::MockTransport;
    use serde_json::json;

    fn client(transport: &Arc<MockTransport>) -> YoutubeClient {
        YoutubeClient::new(transport.clone())
    }

    fn video_query(category_id: &str) -> VideoQuery {
        VideoQuery {
            api_key: "test-key".to_string(),
            max_results: 30,
            region_code: "KR".to_string(),
            category_id: category_id.to_string(),
        }
    }

    #[test]
    fn batches_unique_ids_in_order() {
        let ids: Vec<String> = (0..120).map(|i| format!("UC{i}")).collect();
        let batches = channel_batches(&ids);

        let sizes: Vec<usize> = batches.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![50, 50, 20]);
        assert_eq!(batches[0][0], "UC0");
        assert_eq!(batches[2][19], "UC119");
    }

    #[test]
    fn drops_duplicate_and_empty_ids() {
        let ids: Vec<String> = ["UC1", "", "UC2", "UC1", "UC3", "UC2"]
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(channel_batches(&ids), vec![vec!["UC1", "UC2", "UC3"]]);
        assert!(channel_batches(&[]).is_empty());
    }

    #[rocket::async_test]
    async fn subscriber_lookup_issues_one_call_per_batch() {
        let transport = Arc::new(MockTransport::youtube());
        let mut ids: Vec<String> = (0..120).map(|i| format!("UC{i}")).collect();
        ids.extend((0..30).map(|i| format!("UC{i}")));

        let subscribers = client(&transport)
            .fetch_subscribers(&SubscriberQuery {
                api_key: "test-key".to_string(),
                channel_ids: ids,
            })
            .await;

        let calls = transport.calls_to(CHANNELS_ENDPOINT);
        let sizes: Vec<usize> = calls
            .iter()
            .map(|call| call.param("id").unwrap_or_default().split(',').count())
            .collect();
        assert_eq!(sizes, vec![50, 50, 20]);

        let mut all_ids: Vec<&str> = calls
            .iter()
            .flat_map(|call| call.param("id").unwrap_or_default().split(','))
            .collect();
        let total = all_ids.len();
        all_ids.sort_unstable();
        all_ids.dedup();
        assert_eq!(all_ids.len(), total);

        assert_eq!(subscribers.len(), 120);
        assert_eq!(calls[0].param("maxResults"), Some("50"));
    }

    #[rocket::async_test]
    async fn subscriber_lookup_skips_failed_batches() {
        let transport = Arc::new(MockTransport::new(|call| {
            if call.param("id").is_some_and(|ids| ids.starts_with("UC0,")) {
                Ok(MockTransport::status(500, "backend error"))
            } else {
                MockTransport::youtube_response(call)
            }
        }));
        let ids: Vec<String> = (0..60).map(|i| format!("UC{i}")).collect();

        let subscribers = client(&transport)
            .fetch_subscribers(&SubscriberQuery {
                api_key: "test-key".to_string(),
                channel_ids: ids,
            })
            .await;

        assert_eq!(transport.calls_to(CHANNELS_ENDPOINT).len(), 2);
        assert_eq!(subscribers.len(), 10);
        assert!(subscribers.contains_key("UC59"));
        assert!(!subscribers.contains_key("UC0"));
    }

    #[rocket::async_test]
    async fn subscriber_lookup_without_ids_makes_no_calls() {
        let transport = Arc::new(MockTransport::youtube());
        let subscribers = client(&transport)
            .fetch_subscribers(&SubscriberQuery {
                api_key: "test-key".to_string(),
                channel_ids: vec![String::new()],
            })
            .await;

        assert!(subscribers.is_empty());
        assert!(transport.calls().is_empty());
    }

    #[rocket::async_test]
    async fn keeps_only_assignable_categories() {
        let transport = Arc::new(MockTransport::new(|_| {
            Ok(MockTransport::json(json!({
                "items": [
                    { "id": "1", "snippet": { "title": "Film & Animation", "assignable": true } },
                    { "id": "18", "snippet": { "title": "Short Movies", "assignable": false } },
                    { "id": "10", "snippet": { "title": "Music", "assignable": true } },
                    { "id": "42", "snippet": { "assignable": true } }
                ]
            })))
        }));

        let categories = client(&transport)
            .fetch_categories(&CategoryQuery {
                api_key: "test-key".to_string(),
                region_code: "KR".to_string(),
            })
            .await
            .unwrap();

        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "10"]);

        let call = &transport.calls()[0];
        assert_eq!(call.endpoint, CATEGORIES_ENDPOINT);
        assert_eq!(call.param("part"), Some("snippet"));
        assert_eq!(call.param("regionCode"), Some("KR"));
    }

    #[rocket::async_test]
    async fn category_failure_is_an_error() {
        let transport = Arc::new(MockTransport::new(|_| Ok(MockTransport::status(403, "forbidden"))));
        let result = client(&transport)
            .fetch_categories(&CategoryQuery {
                api_key: "test-key".to_string(),
                region_code: "KR".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Api { status: 403, .. })));
    }

    #[rocket::async_test]
    async fn requests_most_popular_videos() {
        let transport = Arc::new(MockTransport::youtube());
        let videos = client(&transport)
            .fetch_popular_videos(&video_query("0"))
            .await
            .unwrap();

        assert_eq!(videos.len(), 2);
        let call = &transport.calls()[0];
        assert_eq!(call.endpoint, VIDEOS_ENDPOINT);
        assert_eq!(call.param("part"), Some("snippet,statistics"));
        assert_eq!(call.param("chart"), Some("mostPopular"));
        assert_eq!(call.param("maxResults"), Some("30"));
        assert_eq!(call.param("regionCode"), Some("KR"));
        assert_eq!(call.param("key"), Some("test-key"));
        assert_eq!(call.param("videoCategoryId"), None);
    }

    #[rocket::async_test]
    async fn filters_videos_by_category() {
        let transport = Arc::new(MockTransport::youtube());
        client(&transport)
            .fetch_popular_videos(&video_query("10"))
            .await
            .unwrap();

        assert_eq!(transport.calls()[0].param("videoCategoryId"), Some("10"));
    }

    #[rocket::async_test]
    async fn video_errors_carry_status_and_json_detail() {
        let transport = Arc::new(MockTransport::new(|_| {
            Ok(MockTransport::json_status(
                403,
                json!({ "error": { "code": 403, "message": "quotaExceeded" } }),
            ))
        }));

        match client(&transport).fetch_popular_videos(&video_query("0")).await {
            Err(AppError::Api { status, detail }) => {
                assert_eq!(status, 403);
                assert!(detail.contains("quotaExceeded"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rocket::async_test]
    async fn video_errors_truncate_non_json_bodies() {
        let body = "x".repeat(500);
        let transport = Arc::new(MockTransport::new(move |_| Ok(MockTransport::status(502, &body))));

        match client(&transport).fetch_popular_videos(&video_query("0")).await {
            Err(AppError::Api { status, detail }) => {
                assert_eq!(status, 502);
                assert_eq!(detail.len(), 200);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rocket::async_test]
    async fn missing_items_is_an_error() {
        let transport = Arc::new(MockTransport::new(|_| Ok(MockTransport::json(json!({ "kind": "youtube#videoListResponse" })))));
        let result = client(&transport).fetch_popular_videos(&video_query("0")).await;
        assert!(matches!(result, Err(AppError::MissingItems)));
    }

    #[rocket::async_test]
    async fn transport_timeouts_propagate() {
        let transport = Arc::new(MockTransport::new(|_| Err(AppError::Timeout)));
        let result = client(&transport).fetch_popular_videos(&video_query("0")).await;
        assert!(matches!(result, Err(AppError::Timeout)));
    }

    #[rocket::async_test]
    async fn unanswered_requests_time_out() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        let transport = HttpTransport::with_timeout(&base_url, Duration::from_millis(200)).unwrap();

        let result = transport.get(VIDEOS_ENDPOINT, &[]).await;

        assert!(matches!(result, Err(AppError::Timeout)), "{result:?}");
        drop(listener);
    }

    #[rocket::async_test]
    async fn refused_connections_are_network_errors() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);
        let transport = HttpTransport::new(&base_url).unwrap();

        let result = transport.get(VIDEOS_ENDPOINT, &[]).await;

        assert!(matches!(result, Err(AppError::Network(_))), "{result:?}");
    }

    #[rocket::async_test]
    async fn malformed_bodies_are_decode_errors() {
        let transport = Arc::new(MockTransport::new(|_| Ok(MockTransport::status(200, "<html>"))));
        let result = client(&transport).fetch_popular_videos(&video_query("0")).await;
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn normalizes_base_url() {
        let transport = HttpTransport::new("http://localhost:9000/youtube/v3").unwrap();
        assert_eq!(
            transport.base_url.join(VIDEOS_ENDPOINT).unwrap().as_str(),
            "http://localhost:9000/youtube/v3/videos"
        );
    }
}
