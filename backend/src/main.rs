#[macro_use]
extern crate rocket;

mod api;
mod config;
mod error;
mod models;
mod services;

use crate::config::{create_app_state, init_logger, load_environment, ConfigChain};
use crate::services::cache::ResponseCache;
use crate::services::youtube_service::YoutubeClient;
use rocket::{Build, Rocket};

pub struct AppState {
    pub config: ConfigChain,
    pub youtube: YoutubeClient,
    pub cache: ResponseCache,
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![api::index, api::login, api::logout])
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    init_logger();

    let state = create_app_state()?;
    let _ = build_rocket(state).launch().await?;
    Ok(())
}
