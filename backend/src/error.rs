use thiserror::Error;

/// Failures surfaced to the dashboard while serving one request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(String),

    #[error("request to the YouTube API timed out")]
    Timeout,

    #[error("{0}")]
    Network(String),

    #[error("YouTube API 오류 (status={status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("API 응답에 items가 없습니다. 쿼리 파라미터를 확인하세요.")]
    MissingItems,

    #[error("{0}")]
    Decode(String),
}

impl AppError {
    /// Configuration errors stop the render; everything else is shown and
    /// can be retried by the user.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Config(_))
    }

    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(msg) => format!("설정 오류: {msg}"),
            AppError::Timeout => {
                "요청이 시간 초과되었습니다. 네트워크 상태를 확인하고 다시 시도하세요.".to_string()
            }
            AppError::Network(msg) => format!("네트워크 오류가 발생했습니다: {msg}"),
            AppError::Api { .. } | AppError::MissingItems => self.to_string(),
            AppError::Decode(msg) => format!("알 수 없는 오류가 발생했습니다: {msg}"),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::Timeout
        } else if e.is_decode() {
            AppError::Decode(e.to_string())
        } else {
            AppError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

/// Outcome of a rejected login attempt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("로그인 자격 증명이 설정되지 않았습니다. TEMP_USERNAME/PASSWORD를 secrets 또는 .env에 설정하세요.")]
    NotConfigured,

    #[error("아이디 또는 비밀번호가 올바르지 않습니다.")]
    InvalidCredentials,
}
