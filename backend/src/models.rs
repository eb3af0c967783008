use frontend::models::{CategoryChoice, VideoRow};
use rocket::FromForm;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Thumbnail resolutions, best first.
pub const THUMBNAIL_PREFERENCE: [&str; 5] = ["maxres", "standard", "high", "medium", "default"];

// Documentation: https://developers.google.com/youtube/v3/docs/videos/list
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    pub items: Option<Vec<Video>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub id: String,
    pub snippet: VideoSnippet,
    pub statistics: VideoStatistics,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: Option<String>,
    pub channel_id: String,
    pub channel_title: Option<String>,
    pub thumbnails: HashMap<String, Thumbnail>,
}

impl VideoSnippet {
    pub fn best_thumbnail(&self) -> Option<&str> {
        THUMBNAIL_PREFERENCE.iter().find_map(|size| {
            self.thumbnails
                .get(*size)
                .and_then(|thumbnail| thumbnail.url.as_deref())
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoStatistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

impl From<Video> for VideoRow {
    fn from(video: Video) -> Self {
        let thumbnail_url = video.snippet.best_thumbnail().map(String::from);
        VideoRow {
            video_id: video.id,
            title: video.snippet.title,
            channel_id: video.snippet.channel_id,
            channel_title: video.snippet.channel_title,
            thumbnail_url,
            view_count: video.statistics.view_count,
            like_count: video.statistics.like_count,
            comment_count: video.statistics.comment_count,
        }
    }
}

// Documentation: https://developers.google.com/youtube/v3/docs/channels/list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChannelListResponse {
    pub items: Vec<Channel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Channel {
    pub id: String,
    pub statistics: ChannelStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelStatistics {
    pub subscriber_count: Option<String>,
}

// Documentation: https://developers.google.com/youtube/v3/docs/videoCategories/list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryListResponse {
    pub items: Vec<CategoryItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryItem {
    pub id: Option<String>,
    pub snippet: CategorySnippet,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategorySnippet {
    pub title: Option<String>,
    pub assignable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
}

impl From<Category> for CategoryChoice {
    fn from(category: Category) -> Self {
        CategoryChoice {
            id: category.id,
            title: category.title,
        }
    }
}

/// Parameters of one `videos.list?chart=mostPopular` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoQuery {
    pub api_key: String,
    pub max_results: u32,
    pub region_code: String,
    pub category_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuery {
    pub api_key: String,
    pub region_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberQuery {
    pub api_key: String,
    pub channel_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub name: String,
}

impl User {
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if !self.username.is_empty() {
            &self.username
        } else {
            "user"
        }
    }
}

/// Per-browser session. The OAuth fields are placeholders and stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<User>,
    pub oauth_state: Option<String>,
    pub code_verifier: Option<String>,
    pub access_token: Option<String>,
    pub id_token: Option<String>,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn clear(&mut self) {
        *self = SessionState::default();
    }
}

#[derive(Debug, FromForm)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
