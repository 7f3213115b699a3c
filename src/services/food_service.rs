use std::{cmp::Ordering, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    data::{FoodSource, entities::FoodItem},
    error::AppError,
    services::food_draft::FoodDraft,
};

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Category,
    Price,
    Status,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::Price => "price",
            SortField::Status => "status",
        }
    }

    fn compare(&self, a: &FoodItem, b: &FoodItem) -> Ordering {
        match self {
            SortField::Name => compare_text(&a.name, &b.name),
            SortField::Category => compare_text(&a.category, &b.category),
            SortField::Status => compare_text(a.status.as_str(), b.status.as_str()),
            SortField::Price => a.price.total_cmp(&b.price),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Search, sort and page for the food table. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodQuery {
    pub search: String,
    pub sort: SortField,
    pub direction: SortDirection,
    pub page: usize,
}

impl FoodQuery {
    /// Same column flips direction; a new column starts ascending.
    pub fn sorted_by(&self, field: SortField) -> Self {
        let direction = if self.sort == field {
            self.direction.toggled()
        } else {
            SortDirection::Asc
        };
        Self {
            sort: field,
            direction,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
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
        params.push(format!("page={}", self.page.max(1)));
        params.join("&")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodPage {
    pub items: Vec<FoodItem>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub query: FoodQuery,
}

impl FoodPage {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first row shown, for the "Showing x to y" footer.
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * PAGE_SIZE + 1
        }
    }

    pub fn last_index(&self) -> usize {
        (self.page - 1) * PAGE_SIZE + self.items.len()
    }
}

/// Filter, sort and slice one page out of `items`.
pub fn apply_query(items: Vec<FoodItem>, query: &FoodQuery) -> FoodPage {
    let needle = query.search.trim().to_lowercase();
    let mut matching: Vec<FoodItem> = items
        .into_iter()
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        })
        .collect();

    matching.sort_by(|a, b| {
        let ordering = query.sort.compare(a, b);
        match query.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    let total_items = matching.len();
    let total_pages = total_items.div_ceil(PAGE_SIZE);
    let page = query.page.clamp(1, total_pages.max(1));
    let items = matching
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    FoodPage {
        items,
        page,
        total_pages,
        total_items,
        query: query.with_page(page),
    }
}

#[derive(Clone)]
pub struct FoodService {
    foods: Arc<dyn FoodSource>,
}

impl FoodService {
    pub fn new(foods: Arc<dyn FoodSource>) -> Self {
        Self { foods }
    }

    pub async fn list(&self, query: &FoodQuery) -> Result<FoodPage, AppError> {
        let items = self.foods.list().await?;
        Ok(apply_query(items, query))
    }

    pub async fn require(&self, id: &str) -> Result<FoodItem, AppError> {
        self.foods
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Food item not found"))
    }

    pub async fn create(&self, draft: FoodDraft) -> Result<FoodItem, AppError> {
        let food = draft.into_new_food()?;
        let created = self.foods.create(food).await?;
        tracing::info!(id = %created.id, name = %created.name, "food item created");
        Ok(created)
    }

    pub async fn update(&self, id: &str, draft: FoodDraft) -> Result<FoodItem, AppError> {
        let food = draft.into_new_food()?;
        let updated = self
            .foods
            .update(id, food)
            .await?
            .ok_or_else(|| AppError::not_found("Food item not found"))?;
        tracing::info!(id = %updated.id, "food item updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.foods.delete(id).await? {
            return Err(AppError::not_found("Food item not found"));
        }
        tracing::info!(id = %id, "food item deleted");
        Ok(())
    }
}
