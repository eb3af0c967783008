use crate::models::{Notice, SubscriberCounts, VideoRow};
use crate::utils::{humanize_count, watch_url};
use yew::prelude::*;

/// Shown instead of a subscriber count when the channel lookup had no match.
pub const UNKNOWN_SUBSCRIBERS: &str = "알수없음";

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    if let Some(notice) = &props.notice {
        html! {
            <div class={classes!("px-4", "py-3", "rounded", "mb-4", notice.level.classes())}>
                { &notice.message }
            </div>
        }
    } else {
        html! {}
    }
}

pub fn subscriber_label(subscribers: Option<&String>) -> String {
    match subscribers {
        Some(count) => format!("{}명", humanize_count(count)),
        None => UNKNOWN_SUBSCRIBERS.to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoRow,
    pub subscribers: Option<String>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let title = video.title.clone().unwrap_or_else(|| "(제목 없음)".to_string());
    let channel = video
        .channel_title
        .clone()
        .unwrap_or_else(|| "(채널 정보 없음)".to_string());
    let counter = |value: &Option<String>| humanize_count(value.as_deref().unwrap_or("0"));

    html! {
        <div class="flex gap-4 py-4">
            <div class="w-1/4 shrink-0">
                {
                    if let Some(url) = &video.thumbnail_url {
                        html! { <img src={url.clone()} alt={title.clone()} class="w-full rounded" /> }
                    } else {
                        html! { <p class="text-sm text-gray-500">{"(썸네일 없음)"}</p> }
                    }
                }
            </div>
            <div class="w-3/4">
                <p class="font-semibold text-lg">
                    <a href={watch_url(&video.video_id)} target="_blank" class="text-blue-600 hover:underline">
                        { &title }
                    </a>
                </p>
                <p class="text-sm text-gray-500">
                    { format!("채널: {} | 구독자: {}", channel, subscriber_label(props.subscribers.as_ref())) }
                </p>
                <p class="text-gray-800">
                    {
                        format!(
                            "조회수: {}회 · 좋아요: {}개 · 댓글: {}개",
                            counter(&video.view_count),
                            counter(&video.like_count),
                            counter(&video.comment_count),
                        )
                    }
                </p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub videos: Vec<VideoRow>,
    pub subscribers: SubscriberCounts,
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    let last = props.videos.len().saturating_sub(1);

    html! {
        <div>
            { for props.videos.iter().enumerate().map(|(idx, video)| html! {
                <>
                    <VideoCard
                        video={video.clone()}
                        subscribers={props.subscribers.get(&video.channel_id).cloned()}
                    />
                    { if idx < last { html! { <hr class="border-gray-300" /> } } else { html! {} } }
                </>
            })}
        </div>
    }
}
