use std::sync::Arc;

use axum::{Router, middleware, response::Redirect, routing::get};

use crate::{middleware::require_session, state::AppState};

use super::{auth, banners, contacts, customers, dashboard, food, profile, reports, transactions};

pub fn router(state: Arc<AppState>) -> Router {
    let console = Router::new()
        .merge(dashboard::router())
        .merge(food::router())
        .merge(customers::router())
        .merge(profile::router())
        .merge(banners::router())
        .merge(contacts::router())
        .merge(transactions::router())
        .merge(reports::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/admin", get(|| async { Redirect::to("/admin/dashboard") }))
        .merge(auth::router())
        .merge(console)
        .with_state(state)
}
