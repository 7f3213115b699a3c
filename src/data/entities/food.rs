use serde::{Deserialize, Serialize};

pub const CATEGORIES: [&str; 6] = [
    "Main Course",
    "Appetizer",
    "Side",
    "Dessert",
    "Beverage",
    "Salad",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodStatus {
    #[default]
    Available,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    Hidden,
}

impl FoodStatus {
    pub const ALL: [FoodStatus; 3] = [
        FoodStatus::Available,
        FoodStatus::OutOfStock,
        FoodStatus::Hidden,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodStatus::Available => "Available",
            FoodStatus::OutOfStock => "Out of Stock",
            FoodStatus::Hidden => "Hidden",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            FoodStatus::Available => "badge-green",
            FoodStatus::OutOfStock => "badge-red",
            FoodStatus::Hidden => "badge-gray",
        }
    }
}

impl TryFrom<&str> for FoodStatus {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or(())
    }
}

/// A priced add-on: variants replace the base size, toppings stack on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodOption {
    pub id: String,
    pub name: String,
    pub price: f64,
}

pub type FoodVariant = FoodOption;
pub type FoodTopping = FoodOption;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub status: FoodStatus,
    pub variants: Vec<FoodVariant>,
    pub toppings: Vec<FoodTopping>,
}

/// Everything but the id; what a source stores on create or update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub status: FoodStatus,
    pub variants: Vec<FoodVariant>,
    pub toppings: Vec<FoodTopping>,
}

impl NewFood {
    pub fn into_item(self, id: String) -> FoodItem {
        FoodItem {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            price: self.price,
            image: self.image,
            status: self.status,
            variants: self.variants,
            toppings: self.toppings,
        }
    }
}

impl From<FoodItem> for NewFood {
    fn from(item: FoodItem) -> Self {
        Self {
            name: item.name,
            description: item.description,
            category: item.category,
            price: item.price,
            image: item.image,
            status: item.status,
            variants: item.variants,
            toppings: item.toppings,
        }
    }
}

pub fn new_food_id() -> String {
    format!("FOOD-{}", uuid::Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_display_names() {
        assert_eq!(FoodStatus::try_from("Out of Stock"), Ok(FoodStatus::OutOfStock));
        assert_eq!(FoodStatus::try_from("hidden"), Ok(FoodStatus::Hidden));
        assert!(FoodStatus::try_from("Sold").is_err());
    }

    #[test]
    fn status_serializes_with_spaces() {
        let json = serde_json::to_string(&FoodStatus::OutOfStock).expect("serialize");

        assert_eq!(json, "\"Out of Stock\"");
    }

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let first = new_food_id();
        let second = new_food_id();

        assert!(first.starts_with("FOOD-"));
        assert_ne!(first, second);
    }
}
