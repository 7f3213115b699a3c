use std::sync::Arc;

use axum::{Router, extract::State, routing::get};

use crate::{
    middleware::AuthGuard,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, dashboard_service::DashboardOverview},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dashboard", get(overview))
        .with_state(state)
}

async fn overview(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
) -> ApiResult<DashboardOverview> {
    let service = ServiceContext::from_state(state.as_ref()).dashboard();
    JsonApiResponse::ok(service.overview().await?)
}
