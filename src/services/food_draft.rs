use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    data::entities::{FoodItem, FoodOption, FoodStatus, NewFood},
    error::AppError,
};

const REQUIRED_FIELDS: &str = "Please fill in all required fields";

/// Unparsable or non-finite input reads as zero, which then fails validation.
pub fn parse_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Variant,
    Topping,
}

impl OptionKind {
    fn prefix(&self) -> &'static str {
        match self {
            OptionKind::Variant => "VAR",
            OptionKind::Topping => "TOP",
        }
    }

    fn invalid_message(&self) -> &'static str {
        match self {
            OptionKind::Variant => "Please enter a valid variant name and price",
            OptionKind::Topping => "Please enter a valid topping name and price",
        }
    }
}

fn valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// The food form's working copy, edited until it is saved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub status: FoodStatus,
    pub variants: Vec<FoodOption>,
    pub toppings: Vec<FoodOption>,
}

impl FoodDraft {
    pub fn add_variant(&mut self, name: &str, price: f64) -> Result<&FoodOption, AppError> {
        self.add_option(OptionKind::Variant, name, price)
    }

    pub fn add_topping(&mut self, name: &str, price: f64) -> Result<&FoodOption, AppError> {
        self.add_option(OptionKind::Topping, name, price)
    }

    pub fn remove_variant(&mut self, id: &str) -> bool {
        remove_by_id(&mut self.variants, id)
    }

    pub fn remove_topping(&mut self, id: &str) -> bool {
        remove_by_id(&mut self.toppings, id)
    }

    fn add_option(
        &mut self,
        kind: OptionKind,
        name: &str,
        price: f64,
    ) -> Result<&FoodOption, AppError> {
        let name = name.trim();
        if name.is_empty() || !valid_price(price) {
            return Err(AppError::validation(kind.invalid_message()));
        }

        let list = match kind {
            OptionKind::Variant => &mut self.variants,
            OptionKind::Topping => &mut self.toppings,
        };
        list.push(FoodOption {
            id: format!("{}-{}", kind.prefix(), uuid::Uuid::new_v4().simple()),
            name: name.to_string(),
            price,
        });
        Ok(&list[list.len() - 1])
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() || self.category.trim().is_empty() || !valid_price(self.price)
        {
            return Err(AppError::validation(REQUIRED_FIELDS));
        }
        check_options(OptionKind::Variant, &self.variants)?;
        check_options(OptionKind::Topping, &self.toppings)
    }

    pub fn into_new_food(self) -> Result<NewFood, AppError> {
        self.validate()?;
        Ok(NewFood {
            name: self.name.trim().to_string(),
            description: self.description,
            category: self.category.trim().to_string(),
            price: self.price,
            image: self.image.trim().to_string(),
            status: self.status,
            variants: self.variants,
            toppings: self.toppings,
        })
    }
}

impl From<FoodItem> for FoodDraft {
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

/// Options must carry their kind's id prefix, a unique id, a name and a positive price.
fn check_options(kind: OptionKind, options: &[FoodOption]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for option in options {
        let tagged = option
            .id
            .strip_prefix(kind.prefix())
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|rest| !rest.trim().is_empty());
        if !tagged
            || !seen.insert(option.id.as_str())
            || option.name.trim().is_empty()
            || !valid_price(option.price)
        {
            return Err(AppError::validation(kind.invalid_message()));
        }
    }
    Ok(())
}

fn remove_by_id(options: &mut Vec<FoodOption>, id: &str) -> bool {
    let before = options.len();
    options.retain(|option| option.id != id);
    options.len() != before
}
