use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    data::{CustomerSource, entities::Customer},
    error::AppError,
    services::food_service::SortDirection,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerSort {
    #[default]
    Name,
    Orders,
    Spent,
}

impl CustomerSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerSort::Name => "name",
            CustomerSort::Orders => "orders",
            CustomerSort::Spent => "spent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerQuery {
    pub search: String,
    pub sort: CustomerSort,
    pub direction: SortDirection,
    pub selected: Option<String>,
}

impl CustomerQuery {
    pub fn sorted_by(&self, sort: CustomerSort) -> Self {
        let direction = if self.sort == sort {
            self.direction.toggled()
        } else {
            SortDirection::Asc
        };
        Self {
            sort,
            direction,
            ..self.clone()
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if !self.search.is_empty() {
            params.push(format!("search={}", urlencoding::encode(&self.search)));
        }
        params.push(format!("sort={}", self.sort.as_str()));
        params.push(format!("direction={}", self.direction.as_str()));
        params.join("&")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerListing {
    pub customers: Vec<Customer>,
    pub selected: Option<Customer>,
    pub query: CustomerQuery,
}

pub fn filter_customers(customers: Vec<Customer>, query: &CustomerQuery) -> Vec<Customer> {
    let needle = query.search.trim().to_lowercase();
    let mut matching: Vec<Customer> = customers
        .into_iter()
        .filter(|customer| {
            needle.is_empty()
                || customer.name.to_lowercase().contains(&needle)
                || customer.email.to_lowercase().contains(&needle)
        })
        .collect();

    matching.sort_by(|a, b| {
        let ordering = match query.sort {
            CustomerSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            CustomerSort::Orders => a.order_count.cmp(&b.order_count),
            CustomerSort::Spent => a.total_spent.total_cmp(&b.total_spent),
        };
        match query.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    matching
}

#[derive(Clone)]
pub struct CustomerService {
    customers: Arc<dyn CustomerSource>,
}

impl CustomerService {
    pub fn new(customers: Arc<dyn CustomerSource>) -> Self {
        Self { customers }
    }

    /// An unknown `selected` id simply shows no detail panel.
    pub async fn list(&self, query: &CustomerQuery) -> Result<CustomerListing, AppError> {
        let all = self.customers.list().await?;
        let selected = query
            .selected
            .as_deref()
            .and_then(|id| all.iter().find(|customer| customer.id == id).cloned());
        Ok(CustomerListing {
            customers: filter_customers(all, query),
            selected,
            query: query.clone(),
        })
    }

    pub async fn require(&self, id: &str) -> Result<Customer, AppError> {
        self.customers
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Customer not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MemoryCustomers, StubDelay, seed};

    fn service() -> CustomerService {
        CustomerService::new(Arc::new(MemoryCustomers::new(
            seed::customers(),
            StubDelay::none(),
        )))
    }

    #[tokio::test]
    async fn search_matches_name_or_email() {
        let by_name = service()
            .list(&CustomerQuery {
                search: "JOHN".to_string(),
                ..CustomerQuery::default()
            })
            .await
            .expect("list");
        let by_email = service()
            .list(&CustomerQuery {
                search: "alice@".to_string(),
                ..CustomerQuery::default()
            })
            .await
            .expect("list");

        assert_eq!(
            by_name
                .customers
                .iter()
                .map(|customer| customer.name.as_str())
                .collect::<Vec<_>>(),
            ["Bob Johnson", "John Doe"]
        );
        assert_eq!(by_email.customers.len(), 1);
        assert_eq!(by_email.customers[0].name, "Alice Williams");
    }

    #[tokio::test]
    async fn spent_descending_puts_biggest_spender_first() {
        let query = CustomerQuery::default()
            .sorted_by(CustomerSort::Spent)
            .sorted_by(CustomerSort::Spent);

        let listing = service().list(&query).await.expect("list");

        assert_eq!(query.direction, SortDirection::Desc);
        assert_eq!(listing.customers[0].name, "Alice Williams");
    }

    #[tokio::test]
    async fn selection_resolves_or_is_absent() {
        let found = service()
            .list(&CustomerQuery {
                selected: Some("1".to_string()),
                ..CustomerQuery::default()
            })
            .await
            .expect("list");
        let missing = service()
            .list(&CustomerQuery {
                selected: Some("nope".to_string()),
                ..CustomerQuery::default()
            })
            .await
            .expect("list");

        assert_eq!(found.selected.map(|customer| customer.name), Some("John Doe".to_string()));
        assert_eq!(missing.selected, None);
    }

    #[tokio::test]
    async fn require_reports_unknown_customer() {
        let err = service().require("404").await.expect_err("missing");

        assert_eq!(err, AppError::not_found("Customer not found"));
    }
}
