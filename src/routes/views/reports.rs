use std::sync::Arc;

use askama::Template;
use axum::{Router, extract::State, response::Response, routing::get};

use crate::{
    services::{ServiceContext, transaction_service::TransactionSummary},
    state::AppState,
};

use super::layout::{HtmlError, ShellLayout, page_error, render_page};

#[derive(Template)]
#[template(path = "reports.html")]
struct ReportsPage {
    layout: ShellLayout,
    summary: TransactionSummary,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/admin/reports", get(reports))
}

async fn reports(
    State(state): State<Arc<AppState>>,
    layout: ShellLayout,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).transactions();
    let summary = service.summary().await.map_err(page_error)?;
    let page = ReportsPage { layout, summary };
    render_page(&page.layout, &page, "reports")
}
