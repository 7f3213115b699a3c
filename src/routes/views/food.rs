use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    data::entities::{FoodItem, FoodOption, FoodStatus, food::CATEGORIES},
    error::AppError,
    services::{
        ServiceContext,
        food_draft::{FoodDraft, parse_price},
        food_service::{FoodPage, FoodQuery, SortDirection, SortField},
    },
    state::AppState,
};

use super::layout::{
    HtmlError, Notice, NoticeView, ShellLayout, flash_cookie, page_error, render_page,
    render_with_status,
};

const LIST_PATH: &str = "/admin/food";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(LIST_PATH, get(list))
        .route("/admin/food/create", get(create_form).post(create))
        .route("/admin/food/edit/{id}", get(edit_form).post(update))
        .route("/admin/food/delete/{id}", get(confirm_delete).post(delete))
}

pub struct SortLink {
    pub label: &'static str,
    pub href: String,
    pub indicator: &'static str,
}

pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

fn list_href(query: &FoodQuery) -> String {
    format!("{LIST_PATH}?{}", query.to_query_string())
}

fn sort_links(query: &FoodQuery) -> Vec<SortLink> {
    [
        (SortField::Name, "Name"),
        (SortField::Category, "Category"),
        (SortField::Price, "Price"),
        (SortField::Status, "Status"),
    ]
    .into_iter()
    .map(|(field, label)| SortLink {
        label,
        href: list_href(&query.sorted_by(field).with_page(1)),
        indicator: match (query.sort == field, query.direction) {
            (false, _) => "",
            (true, SortDirection::Asc) => "↑",
            (true, SortDirection::Desc) => "↓",
        },
    })
    .collect()
}

fn page_links(page: &FoodPage) -> Vec<PageLink> {
    (1..=page.total_pages)
        .map(|number| PageLink {
            number,
            href: list_href(&page.query.with_page(number)),
            current: number == page.page,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "food_list.html")]
struct FoodListPage {
    layout: ShellLayout,
    page: FoodPage,
    sort_links: Vec<SortLink>,
    page_links: Vec<PageLink>,
    previous_href: String,
    next_href: String,
}

async fn list(
    State(state): State<Arc<AppState>>,
    layout: ShellLayout,
    Query(query): Query<FoodQuery>,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).food();
    let page = service.list(&query).await.map_err(page_error)?;
    let view = FoodListPage {
        sort_links: sort_links(&page.query),
        page_links: page_links(&page),
        previous_href: list_href(&page.query.with_page(page.page.saturating_sub(1).max(1))),
        next_href: list_href(&page.query.with_page(page.page + 1)),
        layout,
        page,
    };
    render_page(&view.layout, &view, "food list")
}

/// Raw form fields. Option lists travel as hidden JSON between re-renders.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FoodFormInput {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image: String,
    pub status: String,
    pub variants: String,
    pub toppings: String,
    pub variant_name: String,
    pub variant_price: String,
    pub topping_name: String,
    pub topping_price: String,
    pub action: String,
}

/// What the submit button asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Save,
    AddVariant,
    RemoveVariant(String),
    AddTopping,
    RemoveTopping(String),
}

impl From<&str> for FormAction {
    fn from(value: &str) -> Self {
        match value.split_once(':') {
            Some(("remove_variant", id)) => FormAction::RemoveVariant(id.to_string()),
            Some(("remove_topping", id)) => FormAction::RemoveTopping(id.to_string()),
            _ => match value {
                "add_variant" => FormAction::AddVariant,
                "add_topping" => FormAction::AddTopping,
                _ => FormAction::Save,
            },
        }
    }
}

fn parse_options(raw: &str, field: &'static str) -> Vec<FoodOption> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_else(|err| {
        tracing::warn!(field, error = %err, "discarding malformed option list");
        Vec::new()
    })
}

impl FoodFormInput {
    fn to_draft(&self) -> FoodDraft {
        FoodDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: parse_price(&self.price),
            image: self.image.clone(),
            status: FoodStatus::try_from(self.status.as_str()).unwrap_or_default(),
            variants: parse_options(&self.variants, "variants"),
            toppings: parse_options(&self.toppings, "toppings"),
        }
    }

    fn from_item(item: &FoodItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            price: format!("{:.2}", item.price),
            image: item.image.clone(),
            status: item.status.as_str().to_string(),
            ..Self::default()
        }
    }
}

pub struct SelectOption {
    pub value: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "food_form.html")]
struct FoodFormPage {
    layout: ShellLayout,
    heading: &'static str,
    submit_label: &'static str,
    action_url: String,
    form: FoodFormInput,
    variants: Vec<FoodOption>,
    toppings: Vec<FoodOption>,
    variants_json: String,
    toppings_json: String,
    categories: Vec<SelectOption>,
    statuses: Vec<SelectOption>,
}

enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Food Item",
            FormMode::Edit(_) => "Edit Food Item",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Food Item",
            FormMode::Edit(_) => "Update Food Item",
        }
    }

    fn action_url(&self) -> String {
        match self {
            FormMode::Create => "/admin/food/create".to_string(),
            FormMode::Edit(id) => format!("/admin/food/edit/{id}"),
        }
    }
}

fn render_form(
    layout: ShellLayout,
    mode: &FormMode,
    form: FoodFormInput,
    variants: Vec<FoodOption>,
    toppings: Vec<FoodOption>,
    status: StatusCode,
) -> Result<Response, HtmlError> {
    let categories = CATEGORIES
        .into_iter()
        .map(|value| SelectOption {
            value,
            selected: value == form.category,
        })
        .collect();
    let current_status = FoodStatus::try_from(form.status.as_str()).unwrap_or_default();
    let statuses = FoodStatus::ALL
        .into_iter()
        .map(|status| SelectOption {
            value: status.as_str(),
            selected: status == current_status,
        })
        .collect();

    let page = FoodFormPage {
        layout,
        heading: mode.heading(),
        submit_label: mode.submit_label(),
        action_url: mode.action_url(),
        variants_json: serde_json::to_string(&variants).unwrap_or_else(|_| "[]".to_string()),
        toppings_json: serde_json::to_string(&toppings).unwrap_or_else(|_| "[]".to_string()),
        variants,
        toppings,
        form,
        categories,
        statuses,
    };
    render_with_status(&page.layout, &page, status, "food form")
}

async fn create_form(layout: ShellLayout) -> Result<Response, HtmlError> {
    render_form(
        layout,
        &FormMode::Create,
        FoodFormInput::default(),
        Vec::new(),
        Vec::new(),
        StatusCode::OK,
    )
}

async fn edit_form(
    State(state): State<Arc<AppState>>,
    layout: ShellLayout,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).food();
    match service.require(&id).await {
        Ok(item) => render_form(
            layout,
            &FormMode::Edit(id),
            FoodFormInput::from_item(&item),
            item.variants,
            item.toppings,
            StatusCode::OK,
        ),
        Err(AppError::NotFound(_)) => Ok(back_to_list(&state, jar, Notice::FoodNotFound)),
        Err(err) => Err(page_error(err)),
    }
}

async fn create(
    State(state): State<Arc<AppState>>,
    layout: ShellLayout,
    jar: CookieJar,
    Form(input): Form<FoodFormInput>,
) -> Result<Response, HtmlError> {
    submit(state, layout, jar, FormMode::Create, input).await
}

async fn update(
    State(state): State<Arc<AppState>>,
    layout: ShellLayout,
    jar: CookieJar,
    Path(id): Path<String>,
    Form(input): Form<FoodFormInput>,
) -> Result<Response, HtmlError> {
    submit(state, layout, jar, FormMode::Edit(id), input).await
}

/// Option edits re-render the form with the updated draft; only `Save` touches the store.
async fn submit(
    state: Arc<AppState>,
    layout: ShellLayout,
    jar: CookieJar,
    mode: FormMode,
    mut input: FoodFormInput,
) -> Result<Response, HtmlError> {
    let mut draft = input.to_draft();
    let action = FormAction::from(input.action.as_str());

    let outcome = match action {
        FormAction::AddVariant => draft
            .add_variant(&input.variant_name, parse_price(&input.variant_price))
            .map(|_| {
                input.variant_name.clear();
                input.variant_price.clear();
            }),
        FormAction::AddTopping => draft
            .add_topping(&input.topping_name, parse_price(&input.topping_price))
            .map(|_| {
                input.topping_name.clear();
                input.topping_price.clear();
            }),
        FormAction::RemoveVariant(id) => {
            draft.remove_variant(&id);
            Ok(())
        }
        FormAction::RemoveTopping(id) => {
            draft.remove_topping(&id);
            Ok(())
        }
        FormAction::Save => return save(state, layout, jar, mode, input, draft).await,
    };

    let (layout, status) = match outcome {
        Ok(()) => (layout, StatusCode::OK),
        Err(err) => (
            layout.with_notice(NoticeView::error(err.message())),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
    };
    render_form(layout, &mode, input, draft.variants, draft.toppings, status)
}

async fn save(
    state: Arc<AppState>,
    layout: ShellLayout,
    jar: CookieJar,
    mode: FormMode,
    input: FoodFormInput,
    draft: FoodDraft,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).food();
    let (variants, toppings) = (draft.variants.clone(), draft.toppings.clone());
    let result = match &mode {
        FormMode::Create => service.create(draft).await.map(|_| Notice::FoodCreated),
        FormMode::Edit(id) => service.update(id, draft).await.map(|_| Notice::FoodUpdated),
    };

    match result {
        Ok(notice) => Ok(back_to_list(&state, jar, notice)),
        Err(AppError::NotFound(_)) => Ok(back_to_list(&state, jar, Notice::FoodNotFound)),
        Err(err @ AppError::Validation(_)) => render_form(
            layout.with_notice(NoticeView::error(err.message())),
            &mode,
            input,
            variants,
            toppings,
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        Err(err) => Err(page_error(err)),
    }
}

#[derive(Template)]
#[template(path = "food_delete.html")]
struct FoodDeletePage {
    layout: ShellLayout,
    item: FoodItem,
}

async fn confirm_delete(
    State(state): State<Arc<AppState>>,
    layout: ShellLayout,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).food();
    match service.require(&id).await {
        Ok(item) => {
            let page = FoodDeletePage { layout, item };
            render_page(&page.layout, &page, "food delete")
        }
        Err(AppError::NotFound(_)) => Ok(back_to_list(&state, jar, Notice::FoodNotFound)),
        Err(err) => Err(page_error(err)),
    }
}

async fn delete(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).food();
    match service.delete(&id).await {
        Ok(()) => Ok(back_to_list(&state, jar, Notice::FoodDeleted)),
        Err(AppError::NotFound(_)) => Ok(back_to_list(&state, jar, Notice::FoodNotFound)),
        Err(err) => Err(page_error(err)),
    }
}

fn back_to_list(state: &AppState, jar: CookieJar, notice: Notice) -> Response {
    let jar = jar.add(flash_cookie(notice, state.config.auth.cookie_secure));
    (jar, Redirect::to(LIST_PATH)).into_response()
}
