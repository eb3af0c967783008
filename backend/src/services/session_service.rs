use crate::config::LoginCredentials;
use crate::error::AuthError;
use crate::models::{LoginForm, SessionState, User};
use log::{info, warn};
use rocket::http::{Cookie, CookieJar};
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use std::convert::Infallible;

pub const SESSION_COOKIE: &str = "session";
const ADMIN_DISPLAY_NAME: &str = "관리자";

/// Session state of the current request, read from the private session
/// cookie. A missing or unreadable cookie is an empty session.
#[derive(Debug, Default)]
pub struct Session(pub SessionState);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let state = request
            .cookies()
            .get_private(SESSION_COOKIE)
            .and_then(|cookie| serde_json::from_str::<SessionState>(cookie.value()).ok())
            .unwrap_or_default();

        Outcome::Success(Session(state))
    }
}

/// Checks a login attempt against the configured placeholder credentials.
/// This gate is a stand-in and does not protect the API key.
pub fn authenticate(
    expected: Option<&LoginCredentials>,
    form: &LoginForm,
) -> Result<User, AuthError> {
    let expected = expected.ok_or(AuthError::NotConfigured)?;

    if form.username == expected.username && form.password == expected.password {
        Ok(User {
            username: form.username.clone(),
            name: ADMIN_DISPLAY_NAME.to_string(),
        })
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

pub fn store(cookies: &CookieJar<'_>, state: &SessionState) {
    match serde_json::to_string(state) {
        Ok(value) => cookies.add_private(Cookie::new(SESSION_COOKIE, value)),
        Err(e) => warn!("Failed to serialize session: {e}"),
    }
}

/// Verifies the form and, on success, stores the user in a fresh session.
/// On failure the session cookie is left untouched.
pub fn login(
    expected: Option<&LoginCredentials>,
    cookies: &CookieJar<'_>,
    form: &LoginForm,
) -> Result<User, AuthError> {
    let user = authenticate(expected, form)?;
    info!("User '{}' logged in", user.username);

    let state = SessionState {
        user: Some(user.clone()),
        ..SessionState::default()
    };
    store(cookies, &state);
    Ok(user)
}

pub fn logout(cookies: &CookieJar<'_>, session: &mut SessionState) {
    if let Some(user) = &session.user {
        info!("User '{}' logged out", user.username);
    }
    session.clear();
    cookies.remove_private(SESSION_COOKIE);
}
