use std::sync::Arc;

use askama::Template;
use axum::{Router, extract::State, response::Response, routing::get};
use chrono::Local;

use crate::{
    services::{ServiceContext, dashboard_service::DashboardOverview},
    state::AppState,
};

use super::layout::{HtmlError, ShellLayout, page_error, render_page};

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage {
    layout: ShellLayout,
    today: String,
    overview: DashboardOverview,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/admin/dashboard", get(dashboard))
}

async fn dashboard(
    State(state): State<Arc<AppState>>,
    layout: ShellLayout,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).dashboard();
    let overview = service.overview().await.map_err(page_error)?;
    let page = DashboardPage {
        today: Local::now().format("%A, %B %-d, %Y").to_string(),
        layout,
        overview,
    };
    render_page(&page.layout, &page, "dashboard")
}
