use std::sync::Arc;

use askama::Template;
use axum::{Router, response::Response, routing::get};

use crate::state::AppState;

use super::layout::{HtmlError, ShellLayout, render_page};

pub const OPERATOR_ROLE: &str = "Administrator";

#[derive(Template)]
#[template(path = "profile.html")]
struct ProfilePage {
    layout: ShellLayout,
    role: &'static str,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/admin/profile", get(profile))
}

async fn profile(layout: ShellLayout) -> Result<Response, HtmlError> {
    let page = ProfilePage {
        layout,
        role: OPERATOR_ROLE,
    };
    render_page(&page.layout, &page, "profile")
}
