use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    data::{
        TransactionSource,
        entities::{Transaction, TransactionStatus},
    },
    error::AppError,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionQuery {
    pub search: String,
    pub status: Option<TransactionStatus>,
    pub selected: Option<String>,
}

impl TransactionQuery {
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if !self.search.is_empty() {
            params.push(format!("search={}", urlencoding::encode(&self.search)));
        }
        if let Some(status) = self.status {
            params.push(format!("status={}", status.as_str()));
        }
        params.join("&")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionListing {
    pub transactions: Vec<Transaction>,
    pub selected: Option<Transaction>,
    pub query: TransactionQuery,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: TransactionStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionSummary {
    pub total_count: usize,
    pub completed_revenue: f64,
    pub by_status: Vec<StatusCount>,
}

pub fn filter_transactions(
    transactions: Vec<Transaction>,
    query: &TransactionQuery,
) -> Vec<Transaction> {
    let needle = query.search.trim().to_lowercase();
    transactions
        .into_iter()
        .filter(|transaction| {
            needle.is_empty()
                || transaction.order_id.to_lowercase().contains(&needle)
                || transaction.customer.to_lowercase().contains(&needle)
        })
        .filter(|transaction| query.status.is_none_or(|status| transaction.status == status))
        .collect()
}

pub fn summarize(transactions: &[Transaction]) -> TransactionSummary {
    let completed_revenue = transactions
        .iter()
        .filter(|transaction| transaction.status == TransactionStatus::Completed)
        .map(|transaction| transaction.amount)
        .sum();
    let by_status = TransactionStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: transactions
                .iter()
                .filter(|transaction| transaction.status == status)
                .count(),
        })
        .collect();

    TransactionSummary {
        total_count: transactions.len(),
        completed_revenue,
        by_status,
    }
}

/// One CSV row per transaction; items collapse to `name x quantity` joined by `; `.
pub fn export_csv(transactions: &[Transaction]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "id",
            "order_id",
            "customer",
            "date",
            "amount",
            "status",
            "payment_method",
            "items",
        ])
        .map_err(csv_error)?;

    for transaction in transactions {
        let items = transaction
            .items
            .iter()
            .map(|item| format!("{} x {}", item.name, item.quantity))
            .collect::<Vec<_>>()
            .join("; ");
        let amount = format!("{:.2}", transaction.amount);
        writer
            .write_record([
                transaction.id.as_str(),
                transaction.order_id.as_str(),
                transaction.customer.as_str(),
                transaction.date.as_str(),
                amount.as_str(),
                transaction.status.as_str(),
                transaction.payment_method.as_str(),
                items.as_str(),
            ])
            .map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| AppError::internal(format!("CSV export failed: {err}")))?;
    String::from_utf8(bytes).map_err(|err| AppError::internal(format!("CSV export failed: {err}")))
}

fn csv_error(err: csv::Error) -> AppError {
    AppError::internal(format!("CSV export failed: {err}"))
}

#[derive(Clone)]
pub struct TransactionService {
    transactions: Arc<dyn TransactionSource>,
}

impl TransactionService {
    pub fn new(transactions: Arc<dyn TransactionSource>) -> Self {
        Self { transactions }
    }

    pub async fn list(&self, query: &TransactionQuery) -> Result<TransactionListing, AppError> {
        let all = self.transactions.list().await?;
        let selected = query
            .selected
            .as_deref()
            .and_then(|id| all.iter().find(|transaction| transaction.id == id).cloned());
        Ok(TransactionListing {
            transactions: filter_transactions(all, query),
            selected,
            query: query.clone(),
        })
    }

    pub async fn require(&self, id: &str) -> Result<Transaction, AppError> {
        self.transactions
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Transaction not found"))
    }

    pub async fn export(&self, query: &TransactionQuery) -> Result<String, AppError> {
        let listing = self.list(query).await?;
        tracing::info!(rows = listing.transactions.len(), "exporting transactions");
        export_csv(&listing.transactions)
    }

    pub async fn summary(&self) -> Result<TransactionSummary, AppError> {
        let all = self.transactions.list().await?;
        Ok(summarize(&all))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MemoryTransactions, StubDelay, seed};

    fn service() -> TransactionService {
        TransactionService::new(Arc::new(MemoryTransactions::new(
            seed::transactions(),
            StubDelay::none(),
        )))
    }

    fn ids(transactions: &[Transaction]) -> Vec<&str> {
        transactions
            .iter()
            .map(|transaction| transaction.id.as_str())
            .collect()
    }

    #[test]
    fn search_covers_order_id_and_customer() {
        let by_order = filter_transactions(
            seed::transactions(),
            &TransactionQuery {
                search: "ord-002".to_string(),
                ..TransactionQuery::default()
            },
        );
        let by_customer = filter_transactions(
            seed::transactions(),
            &TransactionQuery {
                search: "doe".to_string(),
                ..TransactionQuery::default()
            },
        );

        assert_eq!(ids(&by_order), ["TRX-002"]);
        assert_eq!(ids(&by_customer), ["TRX-001"]);
    }

    #[test]
    fn status_filter_narrows_results() {
        let failed = filter_transactions(
            seed::transactions(),
            &TransactionQuery {
                status: Some(TransactionStatus::Failed),
                ..TransactionQuery::default()
            },
        );

        assert_eq!(ids(&failed), ["TRX-004"]);
    }

    #[test]
    fn csv_lists_items_with_quantities() {
        let csv = export_csv(&seed::transactions()[..1]).expect("export");
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("id,order_id,customer,date,amount,status,payment_method,items")
        );
        assert_eq!(
            lines.next(),
            Some(
                "TRX-001,ORD-001,John Doe,2025-04-10 14:30:00,45.99,completed,Credit Card,Cheeseburger x 2; French Fries x 1; Soft Drink x 2"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn summary_counts_every_status() {
        let summary = summarize(&seed::transactions());

        assert_eq!(summary.total_count, 4);
        assert!((summary.completed_revenue - 78.49).abs() < 1e-9);
        assert_eq!(
            summary
                .by_status
                .iter()
                .map(|entry| (entry.status, entry.count))
                .collect::<Vec<_>>(),
            [
                (TransactionStatus::Completed, 2),
                (TransactionStatus::Pending, 1),
                (TransactionStatus::Failed, 1),
            ]
        );
    }

    #[tokio::test]
    async fn selection_and_require() {
        let service = service();

        let listing = service
            .list(&TransactionQuery {
                selected: Some("TRX-002".to_string()),
                ..TransactionQuery::default()
            })
            .await
            .expect("list");

        assert_eq!(listing.selected.map(|transaction| transaction.items.len()), Some(2));
        assert_eq!(
            service.require("TRX-999").await.expect_err("missing"),
            AppError::not_found("Transaction not found")
        );
    }

    #[tokio::test]
    async fn export_respects_the_filter() {
        let csv = service()
            .export(&TransactionQuery {
                status: Some(TransactionStatus::Pending),
                ..TransactionQuery::default()
            })
            .await
            .expect("export");

        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("TRX-003"));
    }
}
