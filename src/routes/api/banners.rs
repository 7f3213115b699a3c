use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use serde::Deserialize;

use crate::{
    data::entities::{Banner, MoveDirection, NewBanner},
    middleware::AuthGuard,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: MoveDirection,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/banners", get(list_banners).post(create_banner))
        .route("/banners/{id}", put(update_banner).delete(delete_banner))
        .route("/banners/{id}/move", post(move_banner))
        .with_state(state)
}

async fn list_banners(State(state): State<Arc<AppState>>, _auth: AuthGuard) -> ApiResult<Vec<Banner>> {
    let service = ServiceContext::from_state(state.as_ref()).banners();
    JsonApiResponse::ok(service.list().await?)
}

async fn create_banner(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Json(body): Json<NewBanner>,
) -> ApiResult<Banner> {
    let service = ServiceContext::from_state(state.as_ref()).banners();
    let created = service.create(body).await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", created)
}

async fn update_banner(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Path(id): Path<String>,
    Json(body): Json<NewBanner>,
) -> ApiResult<Banner> {
    let service = ServiceContext::from_state(state.as_ref()).banners();
    JsonApiResponse::ok(service.update(&id, body).await?)
}

async fn move_banner(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Path(id): Path<String>,
    Json(body): Json<MoveRequest>,
) -> ApiResult<Vec<Banner>> {
    let service = ServiceContext::from_state(state.as_ref()).banners();
    JsonApiResponse::ok(service.move_banner(&id, body.direction).await?)
}

async fn delete_banner(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Path(id): Path<String>,
) -> ApiResult<serde_json::Value> {
    let service = ServiceContext::from_state(state.as_ref()).banners();
    service.delete(&id).await?;
    JsonApiResponse::with_status(StatusCode::OK, "deleted", serde_json::Value::Null)
}
