use crate::models::{Category, CategoryQuery, SubscriberQuery, Video, VideoQuery};
use log::debug;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const VIDEOS_TTL: Duration = Duration::from_secs(300);
pub const SUBSCRIBERS_TTL: Duration = Duration::from_secs(300);
pub const CATEGORIES_TTL: Duration = Duration::from_secs(3600);

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Results keyed by request parameters, each valid for a fixed TTL.
///
/// The key is derived from the parameters with `key_of`, so two calls with
/// equal parameters share an entry. Only successful fetches are stored.
pub struct TimedCache<P, V> {
    ttl: Duration,
    key_of: fn(&P) -> String,
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
}

impl<P, V: Clone> TimedCache<P, V> {
    pub fn new(ttl: Duration, key_of: fn(&P) -> String) -> Self {
        TimedCache {
            ttl,
            key_of,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, params: &P) -> Option<V> {
        let key = (self.key_of)(params);
        let mut entries = self.entries.lock().ok()?;
        match entries.get(&key) {
            Some(entry) if Instant::now() < entry.expires_at => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(&key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, params: &P, value: V) {
        let key = (self.key_of)(params);
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key,
                CacheEntry {
                    value,
                    expires_at: Instant::now() + self.ttl,
                },
            );
        }
    }

    /// Returns the cached value for `params`, or awaits `fetch` and caches
    /// its result. The lock is not held while `fetch` runs.
    pub async fn get_or_fetch<F, Fut, E>(&self, params: &P, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(params) {
            debug!("Cache hit, skipping upstream call");
            return Ok(value);
        }

        let value = fetch().await?;
        self.insert(params, value.clone());
        Ok(value)
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        if let Ok(entries) = self.entries.lock() {
            entries.len()
        } else {
            0
        }
    }
}

fn video_key(query: &VideoQuery) -> String {
    format!(
        "{}|{}|{}|{}",
        query.api_key, query.max_results, query.region_code, query.category_id
    )
}

fn category_key(query: &CategoryQuery) -> String {
    format!("{}|{}", query.api_key, query.region_code)
}

fn subscriber_key(query: &SubscriberQuery) -> String {
    format!("{}|{}", query.api_key, query.channel_ids.join(","))
}

/// The three upstream result caches of the dashboard.
pub struct ResponseCache {
    pub videos: TimedCache<VideoQuery, Vec<Video>>,
    pub subscribers: TimedCache<SubscriberQuery, HashMap<String, String>>,
    pub categories: TimedCache<CategoryQuery, Vec<Category>>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::with_ttls(VIDEOS_TTL, SUBSCRIBERS_TTL, CATEGORIES_TTL)
    }

    pub fn with_ttls(videos: Duration, subscribers: Duration, categories: Duration) -> Self {
        ResponseCache {
            videos: TimedCache::new(videos, video_key),
            subscribers: TimedCache::new(subscribers, subscriber_key),
            categories: TimedCache::new(categories, category_key),
        }
    }

    pub fn clear_all(&self) {
        debug!(
            "Dropping {} cached entries",
            self.videos.len() + self.subscribers.len() + self.categories.len()
        );
        self.videos.clear();
        self.subscribers.clear();
        self.categories.clear();
    }
}
