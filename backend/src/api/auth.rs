use log::warn;
use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::response::{Flash, Redirect};
use rocket::{post, State};

use crate::error::AuthError;
use crate::models::LoginForm;
use crate::services::session_service::{self, Session};
use crate::AppState;

#[post("/login", data = "<login_form>")]
pub fn login(
    state: &State<AppState>,
    cookies: &CookieJar<'_>,
    login_form: Form<LoginForm>,
) -> Flash<Redirect> {
    let expected = state.config.login_credentials();

    match session_service::login(expected.as_ref(), cookies, &login_form) {
        Ok(_) => Flash::success(Redirect::to("/"), "로그인 성공"),
        Err(e @ AuthError::NotConfigured) => {
            warn!("Login attempted without configured credentials");
            Flash::warning(Redirect::to("/"), e.to_string())
        }
        Err(e) => {
            warn!("Rejected login for '{}'", login_form.username);
            Flash::error(Redirect::to("/"), e.to_string())
        }
    }
}

#[post("/logout")]
pub fn logout(cookies: &CookieJar<'_>, session: Session) -> Redirect {
    let Session(mut state) = session;
    session_service::logout(cookies, &mut state);
    Redirect::to("/")
}
