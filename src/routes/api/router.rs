use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{auth, banners, contact, customers, dashboard, food, transactions};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(auth::router(state.clone()))
        .merge(food::router(state.clone()))
        .merge(customers::router(state.clone()))
        .merge(banners::router(state.clone()))
        .merge(contact::router(state.clone()))
        .merge(transactions::router(state.clone()))
        .merge(dashboard::router(state))
}
