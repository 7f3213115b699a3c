use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    data::entities::Transaction,
    error::AppError,
    middleware::AuthGuard,
    response::{ApiResult, JsonApiResponse},
    services::{
        ServiceContext,
        transaction_service::{TransactionListing, TransactionQuery, TransactionSummary},
    },
    state::AppState,
};

pub const CSV_FILENAME: &str = "transactions.csv";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions/summary", get(summary))
        .route("/transactions/export.csv", get(export))
        .route("/transactions/{id}", get(get_transaction))
        .with_state(state)
}

async fn list_transactions(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Query(query): Query<TransactionQuery>,
) -> ApiResult<TransactionListing> {
    let service = ServiceContext::from_state(state.as_ref()).transactions();
    JsonApiResponse::ok(service.list(&query).await?)
}

async fn summary(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
) -> ApiResult<TransactionSummary> {
    let service = ServiceContext::from_state(state.as_ref()).transactions();
    JsonApiResponse::ok(service.summary().await?)
}

async fn export(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Query(query): Query<TransactionQuery>,
) -> Result<Response, AppError> {
    let service = ServiceContext::from_state(state.as_ref()).transactions();
    let csv = service.export(&query).await?;
    Ok(csv_attachment(csv))
}

async fn get_transaction(
    State(state): State<Arc<AppState>>,
    _auth: AuthGuard,
    Path(id): Path<String>,
) -> ApiResult<Transaction> {
    let service = ServiceContext::from_state(state.as_ref()).transactions();
    JsonApiResponse::ok(service.require(&id).await?)
}

pub(crate) fn csv_attachment(csv: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILENAME}\""),
            ),
        ],
        csv,
    )
        .into_response()
}
