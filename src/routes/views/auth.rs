use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use crate::{
    middleware::{SESSION_COOKIE, expired_cookie, session_cookie},
    response::status_for,
    services::ServiceContext,
    state::AppState,
};

use super::layout::{
    FLASH_COOKIE, HtmlError, Notice, NoticeView, flash_cookie, html_error, read_flash,
};

#[derive(Template)]
#[template(path = "login.html")]
struct LoginPage {
    email: String,
    notice: Option<NoticeView>,
}

#[derive(Template)]
#[template(path = "forgot_password.html")]
struct ForgotPasswordPage {
    email: String,
    notice: Option<NoticeView>,
    sent: bool,
}

#[derive(Template)]
#[template(path = "loading.html")]
struct LoadingPage<'a> {
    refresh_to: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordForm {
    #[serde(default)]
    pub email: String,
}

type HtmlResult = Result<Response, HtmlError>;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(login_form).post(login))
        .route("/forgot-password", get(forgot_form).post(forgot_password))
        .route("/logout", post(logout))
}

/// Placeholder shown while the session holder is busy; it reloads `path` until it settles.
pub fn loading_page(path: &str) -> Response {
    match (LoadingPage { refresh_to: path }).render() {
        Ok(rendered) => Html(rendered).into_response(),
        Err(_) => html_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to render loading page")
            .into_response(),
    }
}

async fn login_form(State(state): State<Arc<AppState>>, jar: CookieJar) -> HtmlResult {
    let services = ServiceContext::from_state(state.as_ref());
    let token = jar.get(SESSION_COOKIE).map(Cookie::value).unwrap_or_default();
    if services.auth(state.as_ref()).verify(token).is_ok() {
        return Ok(Redirect::to("/admin/dashboard").into_response());
    }

    let notice = read_flash(&jar).map(|notice| notice.view());
    let jar = if notice.is_some() {
        jar.add(expired_cookie(FLASH_COOKIE, state.config.auth.cookie_secure))
    } else {
        jar
    };
    let page = LoginPage {
        email: String::new(),
        notice,
    };
    let rendered = render(&page, "login")?;
    Ok((jar, rendered).into_response())
}

async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> HtmlResult {
    let services = ServiceContext::from_state(state.as_ref());
    let secure = state.config.auth.cookie_secure;
    match services
        .auth(state.as_ref())
        .login(form.email.trim(), &form.password)
        .await
    {
        Ok(bundle) => {
            let jar = jar
                .add(session_cookie(bundle.access_token, secure))
                .add(flash_cookie(Notice::LoggedIn, secure));
            Ok((jar, Redirect::to("/admin/dashboard")).into_response())
        }
        Err(err) => {
            let page = LoginPage {
                email: form.email,
                notice: Some(NoticeView::error(err.message())),
            };
            Ok((status_for(&err), render(&page, "login")?).into_response())
        }
    }
}

async fn forgot_form() -> HtmlResult {
    let page = ForgotPasswordPage {
        email: String::new(),
        notice: None,
        sent: false,
    };
    Ok(render(&page, "forgot password")?.into_response())
}

async fn forgot_password(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ForgotPasswordForm>,
) -> HtmlResult {
    let services = ServiceContext::from_state(state.as_ref());
    let result = services
        .auth(state.as_ref())
        .forgot_password(form.email.trim())
        .await;
    let (status, page) = match result {
        Ok(()) => (
            StatusCode::OK,
            ForgotPasswordPage {
                email: form.email,
                notice: Some(NoticeView::success(
                    "Password reset instructions sent to your email",
                )),
                sent: true,
            },
        ),
        Err(err) => (
            status_for(&err),
            ForgotPasswordPage {
                email: form.email,
                notice: Some(NoticeView::error(err.message())),
                sent: false,
            },
        ),
    };
    Ok((status, render(&page, "forgot password")?).into_response())
}

/// Only a request carrying the live session cookie ends the session.
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> HtmlResult {
    let services = ServiceContext::from_state(state.as_ref());
    let auth = services.auth(state.as_ref());
    let secure = state.config.auth.cookie_secure;
    let token = jar.get(SESSION_COOKIE).map(Cookie::value).unwrap_or_default();

    let jar = match auth.verify(token) {
        Ok(_) => {
            if let Err(err) = auth.logout() {
                tracing::warn!(error = %err, "logout could not clear stored session");
            }
            jar.add(expired_cookie(SESSION_COOKIE, secure))
                .add(flash_cookie(Notice::LoggedOut, secure))
        }
        Err(err) => {
            tracing::debug!(reason = %err, "logout without a live session cookie");
            jar.add(expired_cookie(SESSION_COOKIE, secure))
        }
    };
    Ok((jar, Redirect::to("/login")).into_response())
}

fn render<T: Template>(page: &T, what: &'static str) -> Result<Html<String>, HtmlError> {
    page.render().map(Html).map_err(|err| {
        tracing::error!(error = %err, page = what, "template render failed");
        html_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to render page")
    })
}
