use crate::error::AppError;
use crate::models::{Category, CategoryQuery, SubscriberQuery, Video, VideoQuery};
use crate::AppState;
use frontend::models::{
    region_name, Notice, Selection, SubscriberCounts, ALL_CATEGORIES, CUSTOM_REGION,
    DEFAULT_MAX_RESULTS, DEFAULT_REGION, MAX_RESULTS_LIMIT,
};
use log::{error, info, warn};
use std::convert::Infallible;
use url::form_urlencoded;

pub const LOGIN_REQUIRED: &str = "로그인 후 인기 동영상을 확인할 수 있습니다.";
pub const NO_VIDEOS: &str = "표시할 동영상이 없습니다.";

/// Everything the dashboard shows below the auth panel for one request.
#[derive(Debug, Default)]
pub struct DashboardContent {
    pub selection: Selection,
    pub categories: Vec<Category>,
    pub notice: Option<Notice>,
    pub videos: Vec<Video>,
    pub subscribers: SubscriberCounts,
}

/// Turns raw query parameters into the effective control state.
pub fn resolve_selection(
    region: Option<String>,
    custom_region: Option<String>,
    max_results: Option<u32>,
    category: Option<String>,
) -> Selection {
    let region_choice = region
        .filter(|choice| choice == CUSTOM_REGION || region_name(choice).is_some())
        .unwrap_or_else(|| DEFAULT_REGION.to_string());
    let custom_region = custom_region
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| DEFAULT_REGION.to_string());
    let region_code = if region_choice == CUSTOM_REGION {
        custom_region.clone()
    } else {
        region_choice.clone()
    };

    Selection {
        region_choice,
        custom_region,
        region_code,
        max_results: max_results
            .unwrap_or(DEFAULT_MAX_RESULTS)
            .clamp(1, MAX_RESULTS_LIMIT),
        category_id: category
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| ALL_CATEGORIES.to_string()),
    }
}

/// Query string that reproduces `selection` on the dashboard route.
pub fn selection_query(selection: &Selection) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("region", &selection.region_choice)
        .append_pair("max_results", &selection.max_results.to_string())
        .append_pair("category", &selection.category_id);
    if selection.region_choice == CUSTOM_REGION {
        query.append_pair("custom_region", &selection.custom_region);
    }
    query.finish()
}

/// Drops every cached API response. Only logged-in sessions may do this.
pub fn refresh_caches(state: &AppState, logged_in: bool) -> bool {
    if !logged_in {
        warn!("Ignoring cache refresh from a logged-out session");
        return false;
    }
    info!("Clearing cached API responses");
    state.cache.clear_all();
    true
}

async fn load_categories(state: &AppState, query: &CategoryQuery) -> Vec<Category> {
    let result = state
        .cache
        .categories
        .get_or_fetch(query, move || state.youtube.fetch_categories(query))
        .await;

    match result {
        Ok(categories) => categories,
        Err(e) => {
            warn!("Category list unavailable for {}: {e}", query.region_code);
            Vec::new()
        }
    }
}

async fn load_subscribers(state: &AppState, query: &SubscriberQuery) -> SubscriberCounts {
    let result = state
        .cache
        .subscribers
        .get_or_fetch(query, move || async move {
            Ok::<_, Infallible>(state.youtube.fetch_subscribers(query).await)
        })
        .await;

    match result {
        Ok(subscribers) => subscribers,
        Err(never) => match never {},
    }
}

/// Loads the dashboard listing: credentials, login gate, categories, videos
/// and subscriber counts, in that order. Failures end up as a notice.
pub async fn load_dashboard(
    state: &AppState,
    logged_in: bool,
    mut selection: Selection,
) -> DashboardContent {
    let api_key = match state.config.api_key() {
        Ok(key) => key,
        Err(e) => {
            error!("Cannot render dashboard: {e}");
            return DashboardContent {
                selection,
                notice: Some(error_notice(&e)),
                ..DashboardContent::default()
            };
        }
    };

    if !logged_in {
        return DashboardContent {
            selection,
            notice: Some(Notice::info(LOGIN_REQUIRED)),
            ..DashboardContent::default()
        };
    }

    let categories = load_categories(
        state,
        &CategoryQuery {
            api_key: api_key.clone(),
            region_code: selection.region_code.clone(),
        },
    )
    .await;
    if !categories
        .iter()
        .any(|category| category.id == selection.category_id)
    {
        selection.category_id = ALL_CATEGORIES.to_string();
    }

    let video_query = &VideoQuery {
        api_key: api_key.clone(),
        max_results: selection.max_results,
        region_code: selection.region_code.clone(),
        category_id: selection.category_id.clone(),
    };
    let videos = match state
        .cache
        .videos
        .get_or_fetch(video_query, move || state.youtube.fetch_popular_videos(video_query))
        .await
    {
        Ok(videos) => videos,
        Err(e) => {
            if e.is_fatal() {
                error!("Failed to fetch popular videos: {e}");
            } else {
                warn!("Popular videos unavailable, user may retry: {e}");
            }
            return DashboardContent {
                selection,
                categories,
                notice: Some(error_notice(&e)),
                ..DashboardContent::default()
            };
        }
    };

    if videos.is_empty() {
        return DashboardContent {
            selection,
            categories,
            notice: Some(Notice::info(NO_VIDEOS)),
            ..DashboardContent::default()
        };
    }

    let subscribers = load_subscribers(
        state,
        &SubscriberQuery {
            api_key,
            channel_ids: videos
                .iter()
                .map(|video| video.snippet.channel_id.clone())
                .collect(),
        },
    )
    .await;

    info!(
        "Loaded {} videos for region {} ({} channels with subscriber counts)",
        videos.len(),
        selection.region_code,
        subscribers.len()
    );

    DashboardContent {
        selection,
        categories,
        notice: None,
        videos,
        subscribers,
    }
}

/// Maps a request error to the notice shown in place of the listing.
pub fn error_notice(e: &AppError) -> Notice {
    Notice::error(e.user_message())
}
