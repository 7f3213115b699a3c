use std::sync::Arc;

use askama::Template;
use axum::{
    Router,
    extract::{Query, State},
    response::Response,
    routing::get,
};
use serde::Deserialize;

use crate::{
    data::entities::TransactionStatus,
    routes::api::transactions::csv_attachment,
    services::{
        ServiceContext,
        transaction_service::{TransactionListing, TransactionQuery},
    },
    state::AppState,
};

use super::layout::{HtmlError, ShellLayout, page_error, render_page};

const LIST_PATH: &str = "/admin/transactions";

/// Query as the filter form submits it: an empty status means "all".
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TransactionParams {
    pub search: String,
    pub status: String,
    pub selected: Option<String>,
}

impl From<TransactionParams> for TransactionQuery {
    fn from(params: TransactionParams) -> Self {
        Self {
            search: params.search,
            status: TransactionStatus::try_from(params.status.as_str()).ok(),
            selected: params.selected.filter(|id| !id.is_empty()),
        }
    }
}

pub struct StatusOption {
    pub value: &'static str,
    pub selected: bool,
}

pub struct TransactionRow {
    pub id: String,
    pub order_id: String,
    pub customer: String,
    pub date: String,
    pub amount: f64,
    pub status: TransactionStatus,
    pub payment_method: String,
    pub href: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "transactions.html")]
struct TransactionsPage {
    layout: ShellLayout,
    listing: TransactionListing,
    rows: Vec<TransactionRow>,
    statuses: Vec<StatusOption>,
    export_href: String,
    close_href: String,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(LIST_PATH, get(transactions))
        .route("/admin/transactions/export.csv", get(export))
}

fn with_query(path: &str, query: &TransactionQuery) -> String {
    let params = query.to_query_string();
    if params.is_empty() {
        format!("{path}?")
    } else {
        format!("{path}?{params}")
    }
}

async fn transactions(
    State(state): State<Arc<AppState>>,
    layout: ShellLayout,
    Query(params): Query<TransactionParams>,
) -> Result<Response, HtmlError> {
    let query = TransactionQuery::from(params);
    let service = ServiceContext::from_state(state.as_ref()).transactions();
    let listing = service.list(&query).await.map_err(page_error)?;

    let base = with_query(LIST_PATH, &listing.query);
    let selected_id = listing.selected.as_ref().map(|t| t.id.as_str());
    let rows = listing
        .transactions
        .iter()
        .map(|transaction| TransactionRow {
            id: transaction.id.clone(),
            order_id: transaction.order_id.clone(),
            customer: transaction.customer.clone(),
            date: transaction.date.clone(),
            amount: transaction.amount,
            status: transaction.status,
            payment_method: transaction.payment_method.clone(),
            href: format!("{base}&selected={}", urlencoding::encode(&transaction.id)),
            selected: selected_id == Some(transaction.id.as_str()),
        })
        .collect();
    let statuses = TransactionStatus::ALL
        .into_iter()
        .map(|status| StatusOption {
            value: status.as_str(),
            selected: listing.query.status == Some(status),
        })
        .collect();

    let page = TransactionsPage {
        export_href: with_query("/admin/transactions/export.csv", &listing.query),
        close_href: base,
        rows,
        statuses,
        listing,
        layout,
    };
    render_page(&page.layout, &page, "transactions")
}

async fn export(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TransactionParams>,
) -> Result<Response, HtmlError> {
    let query = TransactionQuery::from(params);
    let service = ServiceContext::from_state(state.as_ref()).transactions();
    let csv = service.export(&query).await.map_err(page_error)?;
    Ok(csv_attachment(csv))
}
