use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    data::entities::{Banner, MoveDirection, NewBanner},
    error::AppError,
    services::ServiceContext,
    state::AppState,
};

use super::layout::{HtmlError, Notice, ShellLayout, flash_cookie, page_error, render_page};

const LIST_PATH: &str = "/admin/banners";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BannerForm {
    pub title: String,
    pub image: String,
    pub link: String,
    /// Checkbox: present when ticked.
    pub active: Option<String>,
}

impl From<BannerForm> for NewBanner {
    fn from(form: BannerForm) -> Self {
        Self {
            title: form.title,
            image: form.image,
            link: form.link,
            active: form.active.is_some(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MoveForm {
    pub direction: String,
}

pub struct BannerRow {
    pub banner: Banner,
    pub is_first: bool,
    pub is_last: bool,
}

#[derive(Template)]
#[template(path = "banners.html")]
struct BannersPage {
    layout: ShellLayout,
    rows: Vec<BannerRow>,
    preview: Option<Banner>,
}

#[derive(Template)]
#[template(path = "banner_delete.html")]
struct BannerDeletePage {
    layout: ShellLayout,
    banner: Banner,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(LIST_PATH, get(banners))
        .route("/admin/banners/create", post(create))
        .route("/admin/banners/edit/{id}", post(update))
        .route("/admin/banners/move/{id}", post(move_banner))
        .route("/admin/banners/delete/{id}", get(confirm_delete).post(delete))
}

async fn banners(
    State(state): State<Arc<AppState>>,
    layout: ShellLayout,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).banners();
    let banners = service.list().await.map_err(page_error)?;
    let count = banners.len();
    let preview = banners.first().cloned();
    let rows = banners
        .into_iter()
        .enumerate()
        .map(|(index, banner)| BannerRow {
            banner,
            is_first: index == 0,
            is_last: index + 1 == count,
        })
        .collect();

    let page = BannersPage {
        layout,
        rows,
        preview,
    };
    render_page(&page.layout, &page, "banners")
}

async fn create(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<BannerForm>,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).banners();
    let outcome = service.create(form.into()).await.map(|_| Notice::BannerCreated);
    finish(&state, jar, outcome)
}

async fn update(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
    Form(form): Form<BannerForm>,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).banners();
    let outcome = service
        .update(&id, form.into())
        .await
        .map(|_| Notice::BannerUpdated);
    finish(&state, jar, outcome)
}

async fn move_banner(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
    Form(form): Form<MoveForm>,
) -> Result<Response, HtmlError> {
    let direction = MoveDirection::try_from(form.direction.as_str())
        .map_err(|_| page_error(AppError::bad_request("Unknown move direction")))?;
    let service = ServiceContext::from_state(state.as_ref()).banners();
    let outcome = service
        .move_banner(&id, direction)
        .await
        .map(|_| Notice::BannerMoved);
    finish(&state, jar, outcome)
}

async fn confirm_delete(
    State(state): State<Arc<AppState>>,
    layout: ShellLayout,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).banners();
    match service.require(&id).await {
        Ok(banner) => {
            let page = BannerDeletePage { layout, banner };
            render_page(&page.layout, &page, "banner delete")
        }
        Err(err) => finish(&state, jar, Err(err)),
    }
}

async fn delete(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).banners();
    let outcome = service.delete(&id).await.map(|_| Notice::BannerDeleted);
    finish(&state, jar, outcome)
}

/// Every banner action lands back on the list with a notice.
fn finish(
    state: &AppState,
    jar: CookieJar,
    outcome: Result<Notice, AppError>,
) -> Result<Response, HtmlError> {
    let notice = match outcome {
        Ok(notice) => notice,
        Err(AppError::NotFound(_)) => Notice::BannerNotFound,
        Err(AppError::Validation(_)) => Notice::BannerTitleRequired,
        Err(err) => return Err(page_error(err)),
    };
    let jar = jar.add(flash_cookie(notice, state.config.auth.cookie_secure));
    Ok((jar, Redirect::to(LIST_PATH)).into_response())
}
