//! Server-rendered views of the trending videos dashboard.
//!
//! Components are plain Yew function components; the backend renders them to
//! an HTML string per request with [`render_dashboard`].

mod dashboard;
pub mod models;
pub mod utils;

pub use dashboard::*;

const PAGE_TITLE: &str = "인기 YouTube 동영상";

/// Renders the full dashboard page, including the document shell.
pub async fn render_dashboard(props: DashboardProps) -> String {
    let body = yew::ServerRenderer::<Dashboard>::with_props(move || props)
        .hydratable(false)
        .render()
        .await;

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>📺 {PAGE_TITLE}</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50">{body}</body>
</html>"#
    )
}
