use askama::Template;
use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::{error::AppError, routes::API_PREFIX};

use super::layout::html_error;

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundPage<'a> {
    path: &'a str,
}

/// Fallback for every unmatched path. API paths get the JSON envelope.
pub async fn handler(uri: Uri) -> Response {
    let path = uri.path();
    if path.starts_with(API_PREFIX) {
        return AppError::not_found("Route not found").into_response();
    }

    match (NotFoundPage { path }).render() {
        Ok(rendered) => (StatusCode::NOT_FOUND, Html(rendered)).into_response(),
        Err(_) => html_error(StatusCode::NOT_FOUND, "Page not found").into_response(),
    }
}
