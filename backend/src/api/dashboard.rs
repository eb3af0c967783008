use frontend::models::{CategoryChoice, Notice, VideoRow};
use frontend::DashboardProps;
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::{get, Either, State};

use crate::services::dashboard_service::{
    load_dashboard, refresh_caches, resolve_selection, selection_query,
};
use crate::services::session_service::Session;
use crate::AppState;

fn flash_notice(flash: Option<FlashMessage<'_>>) -> Option<Notice> {
    let flash = flash?;
    let message = flash.message().to_string();
    Some(match flash.kind() {
        "success" => Notice::success(message),
        "warning" => Notice::warning(message),
        "error" => Notice::error(message),
        _ => Notice::info(message),
    })
}

/// The dashboard page. `refresh=true` clears the caches once and redirects
/// to the same selection without the flag.
#[allow(clippy::too_many_arguments)]
#[get("/?<region>&<custom_region>&<max_results>&<category>&<refresh>")]
pub async fn index(
    state: &State<AppState>,
    session: Session,
    flash: Option<FlashMessage<'_>>,
    region: Option<String>,
    custom_region: Option<String>,
    max_results: Option<u32>,
    category: Option<String>,
    refresh: Option<bool>,
) -> Either<Redirect, RawHtml<String>> {
    let Session(session) = session;
    let selection = resolve_selection(region, custom_region, max_results, category);

    if refresh.unwrap_or(false) {
        refresh_caches(state, session.is_logged_in());
        return Either::Left(Redirect::to(format!("/?{}", selection_query(&selection))));
    }

    let auth_notice = flash_notice(flash);
    let content = load_dashboard(state, session.is_logged_in(), selection).await;

    let props = DashboardProps {
        user: session.user.as_ref().map(|user| user.display_name().to_string()),
        auth_notice,
        selection: content.selection,
        categories: content
            .categories
            .into_iter()
            .map(CategoryChoice::from)
            .collect(),
        notice: content.notice,
        videos: content.videos.into_iter().map(VideoRow::from).collect(),
        subscribers: content.subscribers,
    };

    Either::Right(RawHtml(frontend::render_dashboard(props).await))
}
