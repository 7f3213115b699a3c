use std::sync::Arc;

use askama::Template;
use axum::{
    Router,
    extract::{Query, State},
    response::Response,
    routing::get,
};

use crate::{
    services::{
        ServiceContext,
        customer_service::{CustomerListing, CustomerQuery, CustomerSort},
        food_service::SortDirection,
    },
    state::AppState,
};

use super::layout::{HtmlError, ShellLayout, page_error, render_page};

const LIST_PATH: &str = "/admin/customers";

pub struct SortLink {
    pub label: &'static str,
    pub href: String,
    pub indicator: &'static str,
}

pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub order_count: u32,
    pub total_spent: f64,
    pub href: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "customers.html")]
struct CustomersPage {
    layout: ShellLayout,
    listing: CustomerListing,
    rows: Vec<CustomerRow>,
    sort_links: Vec<SortLink>,
    close_href: String,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(LIST_PATH, get(customers))
}

fn list_href(query: &CustomerQuery) -> String {
    format!("{LIST_PATH}?{}", query.to_query_string())
}

fn sort_links(query: &CustomerQuery) -> Vec<SortLink> {
    [
        (CustomerSort::Name, "Customer"),
        (CustomerSort::Orders, "Orders"),
        (CustomerSort::Spent, "Total Spent"),
    ]
    .into_iter()
    .map(|(sort, label)| SortLink {
        label,
        href: list_href(&query.sorted_by(sort)),
        indicator: match (query.sort == sort, query.direction) {
            (false, _) => "",
            (true, SortDirection::Asc) => "↑",
            (true, SortDirection::Desc) => "↓",
        },
    })
    .collect()
}

async fn customers(
    State(state): State<Arc<AppState>>,
    layout: ShellLayout,
    Query(query): Query<CustomerQuery>,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).customers();
    let listing = service.list(&query).await.map_err(page_error)?;
    let base = list_href(&listing.query);
    let selected_id = listing.selected.as_ref().map(|customer| customer.id.as_str());
    let rows = listing
        .customers
        .iter()
        .map(|customer| CustomerRow {
            id: customer.id.clone(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            order_count: customer.order_count,
            total_spent: customer.total_spent,
            href: format!("{base}&selected={}", urlencoding::encode(&customer.id)),
            selected: selected_id == Some(customer.id.as_str()),
        })
        .collect();

    let page = CustomersPage {
        sort_links: sort_links(&listing.query),
        close_href: base,
        rows,
        listing,
        layout,
    };
    render_page(&page.layout, &page, "customers")
}
