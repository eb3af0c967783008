use crate::models::{
    CategoryChoice, Selection, ALL_CATEGORIES, CUSTOM_REGION, MAX_RESULTS_LIMIT, REGIONS,
};
use yew::prelude::*;

pub const ALL_CATEGORIES_LABEL: &str = "전체";

pub fn category_label(categories: &[CategoryChoice], category_id: &str) -> String {
    if category_id == ALL_CATEGORIES {
        return ALL_CATEGORIES_LABEL.to_string();
    }
    categories
        .iter()
        .find(|category| category.id == category_id)
        .map(|category| category.title.clone())
        .unwrap_or_else(|| ALL_CATEGORIES_LABEL.to_string())
}

#[derive(Properties, PartialEq)]
pub struct OptionsPanelProps {
    pub selection: Selection,
    pub categories: Vec<CategoryChoice>,
}

#[function_component(OptionsPanel)]
pub fn options_panel(props: &OptionsPanelProps) -> Html {
    let selection = &props.selection;
    let custom = selection.region_choice == CUSTOM_REGION;

    html! {
        <form method="get" action="/" class="space-y-4">
            <h3 class="text-lg font-semibold text-gray-800">{"옵션"}</h3>

            <label class="block text-sm text-gray-700">
                {"지역 선택"}
                <select name="region" class="w-full p-2 border border-gray-300 rounded">
                    <option value={CUSTOM_REGION} selected={custom}>{"직접 입력"}</option>
                    { for REGIONS.iter().map(|(code, name)| html! {
                        <option value={*code} selected={selection.region_choice == *code}>
                            { format!("{name} ({code})") }
                        </option>
                    })}
                </select>
            </label>

            <label class="block text-sm text-gray-700">
                {"지역 코드 직접 입력 (예: KR)"}
                <input
                    type="text"
                    name="custom_region"
                    value={selection.custom_region.clone()}
                    placeholder="직접 입력 선택 시 사용"
                    class={classes!("w-full", "p-2", "border", "border-gray-300", "rounded", (!custom).then_some("text-gray-400"))}
                />
            </label>

            <label class="block text-sm text-gray-700">
                { format!("표시 개수: {}", selection.max_results) }
                <input
                    type="range"
                    name="max_results"
                    min="1"
                    max={MAX_RESULTS_LIMIT.to_string()}
                    step="1"
                    value={selection.max_results.to_string()}
                    class="w-full"
                />
            </label>

            <label class="block text-sm text-gray-700">
                {"카테고리"}
                <select name="category" class="w-full p-2 border border-gray-300 rounded">
                    <option value={ALL_CATEGORIES} selected={selection.category_id == ALL_CATEGORIES}>
                        { ALL_CATEGORIES_LABEL }
                    </option>
                    { for props.categories.iter().map(|category| html! {
                        <option value={category.id.clone()} selected={selection.category_id == category.id}>
                            { &category.title }
                        </option>
                    })}
                </select>
            </label>

            <div class="flex gap-2">
                <button type="submit" class="flex-1 bg-blue-600 text-white p-2 rounded hover:bg-blue-700">
                    {"적용"}
                </button>
                <button
                    type="submit"
                    name="refresh"
                    value="true"
                    title="캐시를 비우고 최신 데이터를 가져옵니다."
                    class="flex-1 bg-gray-600 text-white p-2 rounded hover:bg-gray-700"
                >
                    {"🔄 새로고침"}
                </button>
            </div>
        </form>
    }
}
