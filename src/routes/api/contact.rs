use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};
use serde::Deserialize;

use crate::{
    data::entities::{BusinessDay, ContactInfo, SocialPlatform},
    error::AppError,
    middleware::AuthGuard,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct FieldValue {
    pub value: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/contact", get(get_contact).put(save_contact))
        .route("/contact/social/{platform}", patch(set_social))
        .route("/contact/hours/{day}", patch(set_hours))
        .with_state(state)
}

async fn get_contact(State(state): State<Arc<AppState>>, _auth: AuthGuard) -> ApiResult<ContactInfo> {
    let service = ServiceContext::from_state(state.as_ref()).contact();
    JsonApiResponse::ok(service.get().await?)
}

async fn save_contact(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Json(body): Json<ContactInfo>,
) -> ApiResult<ContactInfo> {
    let service = ServiceContext::from_state(state.as_ref()).contact();
    JsonApiResponse::ok(service.save(body).await?)
}

async fn set_social(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Path(platform): Path<String>,
    Json(body): Json<FieldValue>,
) -> ApiResult<ContactInfo> {
    let platform = SocialPlatform::try_from(platform.as_str())
        .map_err(|_| AppError::not_found("Unknown social platform"))?;
    let service = ServiceContext::from_state(state.as_ref()).contact();
    JsonApiResponse::ok(service.set_social(platform, &body.value).await?)
}

async fn set_hours(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Path(day): Path<String>,
    Json(body): Json<FieldValue>,
) -> ApiResult<ContactInfo> {
    let day = BusinessDay::try_from(day.as_str())
        .map_err(|_| AppError::not_found("Unknown business day"))?;
    let service = ServiceContext::from_state(state.as_ref()).contact();
    JsonApiResponse::ok(service.set_hours(day, &body.value).await?)
}
