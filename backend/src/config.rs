use crate::error::AppError;
use crate::services::cache::ResponseCache;
use crate::services::youtube_service::{HttpTransport, YoutubeClient};
use crate::AppState;
use anyhow::Result;
use env_logger::Builder;
use log::{info, warn, LevelFilter};
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::sync::Arc;

pub const API_KEY_NAME: &str = "YOUTUBE_API_KEY";
pub const TEMP_USERNAME_NAME: &str = "TEMP_USERNAME";
pub const TEMP_PASSWORD_NAME: &str = "TEMP_PASSWORD";
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";
const DEFAULT_SECRETS_FILE: &str = "secrets.toml";

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("Starting trending dashboard...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

/// One layer of the configuration chain.
pub trait ConfigSource: Send + Sync {
    fn name(&self) -> &'static str;

    fn lookup(&self, key: &str) -> Option<String>;

    fn api_key(&self) -> Option<String> {
        self.lookup(API_KEY_NAME)
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Secrets read from a TOML file. `YOUTUBE_API_KEY` may sit at the top level
/// or under a `[youtube]` table as `api_key`.
#[derive(Debug, Default)]
pub struct SecretStore {
    table: toml::Table,
}

impl SecretStore {
    pub fn parse(contents: &str) -> Result<Self> {
        let table = toml::from_str::<toml::Table>(contents)?;
        Ok(SecretStore { table })
    }

    /// A missing or malformed file yields an empty store so lookups fall
    /// through to the environment.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(store) => {
                    info!("Loaded secrets from {}", path.display());
                    store
                }
                Err(e) => {
                    warn!("Ignoring unreadable secrets file {}: {e}", path.display());
                    SecretStore::default()
                }
            },
            Err(e) => {
                info!("No secrets file at {} ({e}), using environment only", path.display());
                SecretStore::default()
            }
        }
    }

    fn as_string(value: &toml::Value) -> Option<String> {
        match value {
            toml::Value::String(s) => Some(s.clone()),
            toml::Value::Integer(i) => Some(i.to_string()),
            toml::Value::Float(f) => Some(f.to_string()),
            toml::Value::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl ConfigSource for SecretStore {
    fn name(&self) -> &'static str {
        "secrets"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.table.get(key).and_then(Self::as_string)
    }

    fn api_key(&self) -> Option<String> {
        self.lookup(API_KEY_NAME).and_then(non_blank).or_else(|| {
            self.table
                .get("youtube")
                .and_then(toml::Value::as_table)
                .and_then(|youtube| youtube.get("api_key"))
                .and_then(Self::as_string)
        })
    }
}

/// Environment variables, either the live process environment or a fixed set.
pub enum EnvSource {
    Process,
    Fixed(HashMap<String, String>),
}

impl EnvSource {
    pub fn fixed(vars: &[(&str, &str)]) -> Self {
        EnvSource::Fixed(
            vars.iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl ConfigSource for EnvSource {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        match self {
            EnvSource::Process => env::var(key).ok(),
            EnvSource::Fixed(vars) => vars.get(key).cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Ordered configuration providers; the first non-blank answer wins.
pub struct ConfigChain {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigChain {
    pub fn new(sources: Vec<Box<dyn ConfigSource>>) -> Self {
        ConfigChain { sources }
    }

    pub fn layered(secrets: SecretStore, environment: EnvSource) -> Self {
        Self::new(vec![Box::new(secrets), Box::new(environment)])
    }

    pub fn lookup(&self, key: &str) -> Option<String> {
        self.sources
            .iter()
            .find_map(|source| source.lookup(key).and_then(non_blank))
    }

    pub fn api_key(&self) -> Result<String, AppError> {
        self.sources
            .iter()
            .find_map(|source| {
                let key = source.api_key()?.trim().to_string();
                if key.is_empty() {
                    None
                } else {
                    log::debug!("Resolved API key from {}", source.name());
                    Some(key)
                }
            })
            .ok_or_else(|| {
                AppError::Config(format!(
                    "API 키가 설정되지 않았습니다. secrets 파일 또는 .env의 {API_KEY_NAME}를 설정하세요."
                ))
            })
    }

    /// Expected credentials of the temporary login gate, if both are set.
    pub fn login_credentials(&self) -> Option<LoginCredentials> {
        Some(LoginCredentials {
            username: self.lookup(TEMP_USERNAME_NAME)?,
            password: self.lookup(TEMP_PASSWORD_NAME)?,
        })
    }
}

pub fn create_app_state() -> Result<AppState> {
    let secrets_file =
        env::var("SECRETS_FILE").unwrap_or_else(|_| DEFAULT_SECRETS_FILE.to_string());
    let config = ConfigChain::layered(
        SecretStore::load(Path::new(&secrets_file)),
        EnvSource::Process,
    );

    let base_url =
        env::var("YOUTUBE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    info!("Using YouTube Data API at: {base_url}");
    let transport = HttpTransport::new(&base_url)?;

    Ok(AppState {
        config,
        youtube: YoutubeClient::new(Arc::new(transport)),
        cache: ResponseCache::new(),
    })
}
