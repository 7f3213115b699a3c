use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;

use crate::{
    data::entities::FoodItem,
    middleware::AuthGuard,
    response::{ApiResult, JsonApiResponse},
    services::{
        ServiceContext,
        food_draft::FoodDraft,
        food_service::{FoodPage, FoodQuery},
    },
    state::AppState,
};

/// A draft plus the option the client wants appended to it.
#[derive(Debug, Deserialize)]
pub struct DraftOptionRequest {
    #[serde(default)]
    pub draft: FoodDraft,
    pub name: String,
    pub price: f64,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/foods", get(list_foods).post(create_food))
        .route(
            "/foods/{id}",
            get(get_food).put(update_food).delete(delete_food),
        )
        .route("/foods/draft/variants", post(add_variant))
        .route("/foods/draft/toppings", post(add_topping))
        .with_state(state)
}

async fn list_foods(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Query(query): Query<FoodQuery>,
) -> ApiResult<FoodPage> {
    let service = ServiceContext::from_state(state.as_ref()).food();
    JsonApiResponse::ok(service.list(&query).await?)
}

async fn create_food(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Json(body): Json<FoodDraft>,
) -> ApiResult<FoodItem> {
    let service = ServiceContext::from_state(state.as_ref()).food();
    let created = service.create(body).await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", created)
}

async fn get_food(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Path(id): Path<String>,
) -> ApiResult<FoodItem> {
    let service = ServiceContext::from_state(state.as_ref()).food();
    JsonApiResponse::ok(service.require(&id).await?)
}

async fn update_food(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Path(id): Path<String>,
    Json(body): Json<FoodDraft>,
) -> ApiResult<FoodItem> {
    let service = ServiceContext::from_state(state.as_ref()).food();
    JsonApiResponse::ok(service.update(&id, body).await?)
}

async fn delete_food(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Path(id): Path<String>,
) -> ApiResult<serde_json::Value> {
    let service = ServiceContext::from_state(state.as_ref()).food();
    service.delete(&id).await?;
    JsonApiResponse::with_status(StatusCode::OK, "deleted", serde_json::Value::Null)
}

async fn add_variant(_auth: AuthGuard, Json(body): Json<DraftOptionRequest>) -> ApiResult<FoodDraft> {
    let mut draft = body.draft;
    draft.add_variant(&body.name, body.price)?;
    JsonApiResponse::ok(draft)
}

async fn add_topping(_auth: AuthGuard, Json(body): Json<DraftOptionRequest>) -> ApiResult<FoodDraft> {
    let mut draft = body.draft;
    draft.add_topping(&body.name, body.price)?;
    JsonApiResponse::ok(draft)
}
