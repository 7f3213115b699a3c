use std::sync::Arc;

use serde::Serialize;

use crate::{
    data::{
        DashboardSource,
        entities::{RecentOrder, SalesPoint, StatCard, TopSellingItem},
    },
    error::AppError,
};

/// One day's sales scaled against the busiest day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesBar {
    pub date: String,
    pub amount: f64,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOverview {
    pub stats: Vec<StatCard>,
    pub recent_orders: Vec<RecentOrder>,
    pub top_selling: Vec<TopSellingItem>,
    pub sales: Vec<SalesBar>,
}

pub fn sales_bars(points: &[SalesPoint]) -> Vec<SalesBar> {
    let peak = points
        .iter()
        .map(|point| point.amount)
        .fold(0.0_f64, f64::max);
    points
        .iter()
        .map(|point| SalesBar {
            date: point.date.clone(),
            amount: point.amount,
            percent: if peak > 0.0 {
                (point.amount / peak * 100.0).round() as u32
            } else {
                0
            },
        })
        .collect()
}

#[derive(Clone)]
pub struct DashboardService {
    dashboard: Arc<dyn DashboardSource>,
}

impl DashboardService {
    pub fn new(dashboard: Arc<dyn DashboardSource>) -> Self {
        Self { dashboard }
    }

    /// Fetches all four panels concurrently.
    pub async fn overview(&self) -> Result<DashboardOverview, AppError> {
        let (stats, recent_orders, top_selling, sales) = tokio::try_join!(
            self.dashboard.stats(),
            self.dashboard.recent_orders(),
            self.dashboard.top_selling(),
            self.dashboard.sales(),
        )?;
        Ok(DashboardOverview {
            stats,
            recent_orders,
            top_selling,
            sales: sales_bars(&sales),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MemoryDashboard, StubDelay};

    #[test]
    fn bars_scale_to_the_busiest_day() {
        let bars = sales_bars(&[
            SalesPoint {
                date: "2025-04-04".to_string(),
                amount: 925.0,
            },
            SalesPoint {
                date: "2025-04-05".to_string(),
                amount: 1850.0,
            },
        ]);

        assert_eq!(bars[0].percent, 50);
        assert_eq!(bars[1].percent, 100);
    }

    #[test]
    fn bars_for_a_dead_week_are_flat() {
        let bars = sales_bars(&[SalesPoint {
            date: "2025-04-04".to_string(),
            amount: 0.0,
        }]);

        assert_eq!(bars[0].percent, 0);
    }

    #[tokio::test]
    async fn overview_gathers_every_panel() {
        let service = DashboardService::new(Arc::new(MemoryDashboard::seeded(StubDelay::none())));

        let overview = service.overview().await.expect("overview");

        assert_eq!(
            overview
                .stats
                .iter()
                .map(|card| card.title.as_str())
                .collect::<Vec<_>>(),
            ["Total Orders", "Total Customers", "Total Revenue", "Avg. Order Value"]
        );
        assert_eq!(overview.recent_orders.len(), 5);
        assert_eq!(overview.top_selling.len(), 4);
        assert_eq!(overview.sales.len(), 7);
        assert_eq!(overview.sales[6].percent, 100);
    }
}
