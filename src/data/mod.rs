//! Data sources behind the console.
//!
//! Each entity is reached through a trait so services never see the concrete store.
//! The bundled implementations keep seeded records in memory and answer after a fixed delay.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use thiserror::Error;

pub mod entities;
mod memory;
pub mod seed;

pub use memory::{
    MemoryBanners, MemoryContact, MemoryCustomers, MemoryDashboard, MemoryFoods,
    MemoryTransactions,
};

use entities::{
    Banner, ContactEdit, ContactInfo, Customer, FoodItem, MoveDirection, NewBanner, NewFood, RecentOrder,
    SalesPoint, StatCard, TopSellingItem, Transaction,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("{entity} source unavailable: {reason}")]
    Unavailable {
        entity: &'static str,
        reason: String,
    },
}

impl DataError {
    pub fn unavailable(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            entity,
            reason: reason.into(),
        }
    }
}

pub type DataResult<T> = Result<T, DataError>;

/// Artificial latency applied to every source call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StubDelay(Duration);

impl StubDelay {
    pub fn new(delay: Duration) -> Self {
        Self(delay)
    }

    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

#[async_trait]
pub trait FoodSource: Send + Sync {
    async fn list(&self) -> DataResult<Vec<FoodItem>>;
    async fn get(&self, id: &str) -> DataResult<Option<FoodItem>>;
    async fn create(&self, food: NewFood) -> DataResult<FoodItem>;
    async fn update(&self, id: &str, food: NewFood) -> DataResult<Option<FoodItem>>;
    async fn delete(&self, id: &str) -> DataResult<bool>;
}

#[async_trait]
pub trait CustomerSource: Send + Sync {
    async fn list(&self) -> DataResult<Vec<Customer>>;
    async fn get(&self, id: &str) -> DataResult<Option<Customer>>;
}

#[async_trait]
pub trait BannerSource: Send + Sync {
    /// Banners in display order.
    async fn list(&self) -> DataResult<Vec<Banner>>;
    async fn create(&self, banner: NewBanner) -> DataResult<Banner>;
    async fn update(&self, id: &str, banner: NewBanner) -> DataResult<Option<Banner>>;
    async fn delete(&self, id: &str) -> DataResult<bool>;
    /// `None` when the id is unknown, otherwise the reordered list.
    async fn move_banner(
        &self,
        id: &str,
        direction: MoveDirection,
    ) -> DataResult<Option<Vec<Banner>>>;
}

#[async_trait]
pub trait ContactSource: Send + Sync {
    async fn get(&self) -> DataResult<ContactInfo>;
    async fn save(&self, contact: ContactInfo) -> DataResult<ContactInfo>;
    /// Applies a single field change atomically and returns the stored record.
    async fn edit(&self, edit: ContactEdit) -> DataResult<ContactInfo>;
}

#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn list(&self) -> DataResult<Vec<Transaction>>;
    async fn get(&self, id: &str) -> DataResult<Option<Transaction>>;
}

#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn recent_orders(&self) -> DataResult<Vec<RecentOrder>>;
    async fn top_selling(&self) -> DataResult<Vec<TopSellingItem>>;
    async fn sales(&self) -> DataResult<Vec<SalesPoint>>;
    async fn stats(&self) -> DataResult<Vec<StatCard>>;
}

#[derive(Clone)]
pub struct DataContext {
    foods: Arc<dyn FoodSource>,
    customers: Arc<dyn CustomerSource>,
    banners: Arc<dyn BannerSource>,
    contact: Arc<dyn ContactSource>,
    transactions: Arc<dyn TransactionSource>,
    dashboard: Arc<dyn DashboardSource>,
}

impl DataContext {
    /// In-memory sources holding the demo records.
    pub fn seeded(delay: StubDelay) -> Self {
        Self {
            foods: Arc::new(MemoryFoods::new(seed::foods(), delay)),
            customers: Arc::new(MemoryCustomers::new(seed::customers(), delay)),
            banners: Arc::new(MemoryBanners::new(seed::banners(), delay)),
            contact: Arc::new(MemoryContact::new(seed::contact(), delay)),
            transactions: Arc::new(MemoryTransactions::new(seed::transactions(), delay)),
            dashboard: Arc::new(MemoryDashboard::seeded(delay)),
        }
    }

    pub fn with_foods(mut self, foods: Arc<dyn FoodSource>) -> Self {
        self.foods = foods;
        self
    }

    pub fn foods(&self) -> Arc<dyn FoodSource> {
        self.foods.clone()
    }

    pub fn customers(&self) -> Arc<dyn CustomerSource> {
        self.customers.clone()
    }

    pub fn banners(&self) -> Arc<dyn BannerSource> {
        self.banners.clone()
    }

    pub fn contact(&self) -> Arc<dyn ContactSource> {
        self.contact.clone()
    }

    pub fn transactions(&self) -> Arc<dyn TransactionSource> {
        self.transactions.clone()
    }

    pub fn dashboard(&self) -> Arc<dyn DashboardSource> {
        self.dashboard.clone()
    }
}
