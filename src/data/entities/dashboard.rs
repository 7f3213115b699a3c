use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: String,
    pub customer: String,
    pub date: String,
    pub amount: f64,
    pub status: String,
    pub items: Vec<String>,
}

impl RecentOrder {
    pub fn badge(&self) -> &'static str {
        match self.status.to_ascii_lowercase().as_str() {
            "completed" => "badge-green",
            "processing" => "badge-blue",
            "cancelled" => "badge-red",
            _ => "badge-gray",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSellingItem {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub sold_count: u32,
    pub total_stock: u32,
}

impl TopSellingItem {
    /// Share of stock already sold, rounded to a whole percent.
    pub fn sold_percent(&self) -> u32 {
        if self.total_stock == 0 {
            return 0;
        }
        let percent = f64::from(self.sold_count) / f64::from(self.total_stock) * 100.0;
        percent.round().min(100.0) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: f64,
}

impl StatCard {
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }

    pub fn change_label(&self) -> String {
        if self.is_positive() {
            format!("+{:.1}%", self.change)
        } else {
            format!("{:.1}%", self.change)
        }
    }
}
