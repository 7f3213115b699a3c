use std::sync::Arc;

use axum::{Router, response::Redirect, routing::get};

use crate::state::AppState;

use super::{api, views};

pub const API_PREFIX: &str = "/api/v1";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/login") }))
        .nest(API_PREFIX, api::router(state.clone()))
        .merge(views::router(state))
        .fallback(views::not_found::handler)
}
