use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    auth::{SessionStatus, User},
    error::AppError,
    routes::views,
    services::ServiceContext,
    state::AppState,
};

pub const SESSION_COOKIE: &str = "food_admin_session";

/// API guard: a `Bearer` token bound to the live session.
#[derive(Debug, Clone)]
pub struct AuthGuard(pub User);

impl FromRequestParts<Arc<AppState>> for AuthGuard {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(guard) = parts.extensions.get::<AuthGuard>().cloned() {
            return Ok(guard);
        }

        let auth = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        let token = auth
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Missing/invalid Authorization header"))?;

        let services = ServiceContext::from_state(state.as_ref());
        let user = services.auth(state.as_ref()).verify(token)?;
        let guard = AuthGuard(user);
        parts.extensions.insert(guard.clone());
        Ok(guard)
    }
}

/// The operator behind a console request; inserted by [`require_session`].
#[derive(Debug, Clone)]
pub struct SessionUser(pub User);

/// Console guard for `/admin/*`.
///
/// Loading renders the placeholder page, an absent or stale session cookie redirects to
/// `/login`, and a live session passes through with [`SessionUser`] attached.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let services = ServiceContext::from_state(state.as_ref());
    let auth = services.auth(state.as_ref());

    if matches!(auth.status(), SessionStatus::Loading) {
        return views::auth::loading_page(req.uri().path());
    }

    let token = jar.get(SESSION_COOKIE).map(Cookie::value).unwrap_or_default();
    match auth.verify(token) {
        Ok(user) => {
            req.extensions_mut().insert(SessionUser(user));
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(path = %req.uri().path(), reason = %err, "console request not signed in");
            let jar = jar.add(expired_cookie(SESSION_COOKIE, state.config.auth.cookie_secure));
            (jar, Redirect::to("/login")).into_response()
        }
    }
}

pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

pub(crate) fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::ZERO)
        .build()
}
