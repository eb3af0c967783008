mod auth_panel;
mod components;
mod options_panel;

pub use auth_panel::{AuthPanel, AuthPanelProps};
pub use components::{
    subscriber_label, NoticeBanner, VideoCard, VideoList, UNKNOWN_SUBSCRIBERS,
};
pub use options_panel::{category_label, OptionsPanel, ALL_CATEGORIES_LABEL};

use crate::models::{CategoryChoice, Notice, Selection, SubscriberCounts, VideoRow};
use yew::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct DashboardProps {
    pub user: Option<String>,
    pub auth_notice: Option<Notice>,
    pub selection: Selection,
    pub categories: Vec<CategoryChoice>,
    pub notice: Option<Notice>,
    pub videos: Vec<VideoRow>,
    pub subscribers: SubscriberCounts,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let summary = format!(
        "지역: {} | 카테고리: {} | 표시 개수: {}",
        props.selection.region_code,
        category_label(&props.categories, &props.selection.category_id),
        props.videos.len()
    );

    html! {
        <div class="min-h-screen flex">
            <aside class="w-80 shrink-0 bg-white shadow p-6">
                <AuthPanel user={props.user.clone()} notice={props.auth_notice.clone()} />
                <OptionsPanel selection={props.selection.clone()} categories={props.categories.clone()} />
            </aside>
            <main class="flex-1 p-8">
                <h1 class="text-3xl font-bold text-gray-800">{"📺 YouTube 인기 동영상"}</h1>
                <p class="text-sm text-gray-500 mb-6">
                    {"지역 선택 가능 | 표시 개수 조절 | 5분 캐시 | 새로고침으로 최신화"}
                </p>
                <NoticeBanner notice={props.notice.clone()} />
                {
                    if props.videos.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <p class="text-sm text-gray-500 mb-2">{ summary }</p>
                                <VideoList videos={props.videos.clone()} subscribers={props.subscribers.clone()} />
                            </>
                        }
                    }
                }
            </main>
        </div>
    }
}
