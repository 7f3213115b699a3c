use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    data::entities::Customer,
    middleware::AuthGuard,
    response::{ApiResult, JsonApiResponse},
    services::{
        ServiceContext,
        customer_service::{CustomerListing, CustomerQuery},
    },
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/customers", get(list_customers))
        .route("/customers/{id}", get(get_customer))
        .with_state(state)
}

async fn list_customers(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Query(query): Query<CustomerQuery>,
) -> ApiResult<CustomerListing> {
    let service = ServiceContext::from_state(state.as_ref()).customers();
    JsonApiResponse::ok(service.list(&query).await?)
}

async fn get_customer(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Path(id): Path<String>,
) -> ApiResult<Customer> {
    let service = ServiceContext::from_state(state.as_ref()).customers();
    JsonApiResponse::ok(service.require(&id).await?)
}
