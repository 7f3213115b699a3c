use std::{collections::HashMap, sync::Arc};

use askama::Template;
use axum::{
    Form, Router,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    data::entities::{BusinessDay, ContactInfo, SocialPlatform},
    services::ServiceContext,
    state::AppState,
};

use super::layout::{HtmlError, Notice, ShellLayout, flash_cookie, page_error, render_page};

const PAGE_PATH: &str = "/admin/contacts";

#[derive(Debug, Default, Deserialize)]
pub struct ContactParams {
    pub edit: Option<String>,
}

pub struct FieldRow {
    pub name: String,
    pub label: &'static str,
    pub value: String,
}

#[derive(Template)]
#[template(path = "contacts.html")]
struct ContactsPage {
    layout: ShellLayout,
    editing: bool,
    contact: ContactInfo,
    social: Vec<FieldRow>,
    hours: Vec<FieldRow>,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(PAGE_PATH, get(contacts).post(save))
}

fn social_name(platform: SocialPlatform) -> String {
    format!("social_{}", platform.as_str())
}

fn hours_name(day: BusinessDay) -> String {
    format!("hours_{}", day.as_str())
}

/// Builds the record from flat form fields, one typed setter per field.
pub fn contact_from_form(fields: &HashMap<String, String>) -> ContactInfo {
    let value = |name: &str| fields.get(name).map(|v| v.trim().to_string()).unwrap_or_default();

    let mut contact = ContactInfo {
        phone: value("phone"),
        email: value("email"),
        address: value("address"),
        website: value("website"),
        ..ContactInfo::default()
    };
    for platform in SocialPlatform::ALL {
        contact
            .social_media
            .set(platform, value(&social_name(platform)));
    }
    for day in BusinessDay::ALL {
        contact.business_hours.set(day, value(&hours_name(day)));
    }
    contact
}

async fn contacts(
    State(state): State<Arc<AppState>>,
    layout: ShellLayout,
    Query(params): Query<ContactParams>,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).contact();
    let contact = service.get().await.map_err(page_error)?;

    let social = SocialPlatform::ALL
        .into_iter()
        .map(|platform| FieldRow {
            name: social_name(platform),
            label: platform.label(),
            value: contact.social_media.get(platform).to_string(),
        })
        .collect();
    let hours = contact
        .business_hours
        .entries()
        .into_iter()
        .map(|(day, value)| FieldRow {
            name: hours_name(day),
            label: day.label(),
            value: value.to_string(),
        })
        .collect();

    let page = ContactsPage {
        layout,
        editing: params.edit.is_some_and(|edit| edit == "1"),
        contact,
        social,
        hours,
    };
    render_page(&page.layout, &page, "contacts")
}

async fn save(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, HtmlError> {
    let service = ServiceContext::from_state(state.as_ref()).contact();
    service
        .save(contact_from_form(&fields))
        .await
        .map_err(page_error)?;
    let jar = jar.add(flash_cookie(
        Notice::ContactSaved,
        state.config.auth.cookie_secure,
    ));
    Ok((jar, Redirect::to(PAGE_PATH)).into_response())
}
