use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::{
    auth::User,
    error::AppError,
    middleware::{SessionUser, expired_cookie},
    response::status_for,
    state::AppState,
};

pub const FLASH_COOKIE: &str = "food_admin_flash";

pub type HtmlError = (StatusCode, Html<String>);

pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem {
        path: "/admin/dashboard",
        label: "Dashboard",
        icon: "layout-dashboard",
    },
    NavItem {
        path: "/admin/food",
        label: "Food Menu",
        icon: "coffee",
    },
    NavItem {
        path: "/admin/customers",
        label: "Customers",
        icon: "users",
    },
    NavItem {
        path: "/admin/profile",
        label: "User Profile",
        icon: "user",
    },
    NavItem {
        path: "/admin/banners",
        label: "Banners",
        icon: "image",
    },
    NavItem {
        path: "/admin/contacts",
        label: "Contact",
        icon: "phone",
    },
    NavItem {
        path: "/admin/transactions",
        label: "Transactions",
        icon: "shopping-cart",
    },
    NavItem {
        path: "/admin/reports",
        label: "Reports",
        icon: "file-text",
    },
];

/// Label of the nav entry matching `path` exactly, else "Dashboard".
pub fn header_title(path: &str) -> &'static str {
    NAV_ITEMS
        .iter()
        .find(|item| item.path == path)
        .map(|item| item.label)
        .unwrap_or("Dashboard")
}

/// One-shot messages carried across a redirect in the flash cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LoggedIn,
    LoggedOut,
    FoodCreated,
    FoodUpdated,
    FoodDeleted,
    FoodNotFound,
    BannerCreated,
    BannerUpdated,
    BannerMoved,
    BannerDeleted,
    BannerNotFound,
    BannerTitleRequired,
    ContactSaved,
}

impl Notice {
    const ALL: [Notice; 13] = [
        Notice::LoggedIn,
        Notice::LoggedOut,
        Notice::FoodCreated,
        Notice::FoodUpdated,
        Notice::FoodDeleted,
        Notice::FoodNotFound,
        Notice::BannerCreated,
        Notice::BannerUpdated,
        Notice::BannerMoved,
        Notice::BannerDeleted,
        Notice::BannerNotFound,
        Notice::BannerTitleRequired,
        Notice::ContactSaved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Notice::LoggedIn => "logged-in",
            Notice::LoggedOut => "logged-out",
            Notice::FoodCreated => "food-created",
            Notice::FoodUpdated => "food-updated",
            Notice::FoodDeleted => "food-deleted",
            Notice::FoodNotFound => "food-not-found",
            Notice::BannerCreated => "banner-created",
            Notice::BannerUpdated => "banner-updated",
            Notice::BannerMoved => "banner-moved",
            Notice::BannerDeleted => "banner-deleted",
            Notice::BannerNotFound => "banner-not-found",
            Notice::BannerTitleRequired => "banner-title-required",
            Notice::ContactSaved => "contact-saved",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::LoggedIn => "Login successful",
            Notice::LoggedOut => "You have been logged out",
            Notice::FoodCreated => "Food item created successfully",
            Notice::FoodUpdated => "Food item updated successfully",
            Notice::FoodDeleted => "Food item deleted successfully",
            Notice::FoodNotFound => "Food item not found",
            Notice::BannerCreated => "Banner created successfully",
            Notice::BannerUpdated => "Banner updated successfully",
            Notice::BannerMoved => "Banner order updated",
            Notice::BannerDeleted => "Banner deleted successfully",
            Notice::BannerNotFound => "Banner not found",
            Notice::BannerTitleRequired => "Banner title is required",
            Notice::ContactSaved => "Contact information updated successfully",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::FoodNotFound | Notice::BannerNotFound | Notice::BannerTitleRequired
        )
    }

    pub fn view(&self) -> NoticeView {
        NoticeView {
            message: self.message().to_string(),
            kind: if self.is_error() { "error" } else { "success" },
        }
    }
}

impl TryFrom<&str> for Notice {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|notice| notice.as_str() == value)
            .ok_or(())
    }
}

/// A notice ready for display, either from the flash cookie or inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub message: String,
    pub kind: &'static str,
}

impl NoticeView {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: "error",
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: "success",
        }
    }
}

pub fn flash_cookie(notice: Notice, secure: bool) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, notice.as_str()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Reads the flash notice; unknown codes are dropped.
pub fn read_flash(jar: &CookieJar) -> Option<Notice> {
    jar.get(FLASH_COOKIE)
        .and_then(|cookie| Notice::try_from(cookie.value()).ok())
}

pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ShellParams {
    menu: Option<String>,
}

/// Everything the shell template needs around a page.
pub struct ShellLayout {
    pub title: &'static str,
    pub current_path: String,
    pub user: User,
    pub avatar: String,
    pub nav: Vec<NavLink>,
    pub mobile_menu_open: bool,
    pub notice: Option<NoticeView>,
    flash_seen: bool,
    cookie_secure: bool,
}

impl ShellLayout {
    pub fn new(path: &str, user: User, mobile_menu_open: bool) -> Self {
        let nav = NAV_ITEMS
            .iter()
            .map(|item| NavLink {
                path: item.path,
                label: item.label,
                icon: item.icon,
                active: item.path == path,
            })
            .collect();
        Self {
            title: header_title(path),
            current_path: path.to_string(),
            avatar: user.initial(),
            user,
            nav,
            mobile_menu_open,
            notice: None,
            flash_seen: false,
            cookie_secure: false,
        }
    }

    /// Replaces any flash notice with an inline one.
    pub fn with_notice(mut self, notice: NoticeView) -> Self {
        self.notice = Some(notice);
        self
    }

    /// Href for the mobile menu toggle.
    pub fn menu_toggle_href(&self) -> String {
        if self.mobile_menu_open {
            self.current_path.clone()
        } else {
            format!("{}?menu=open", self.current_path)
        }
    }
}

impl FromRequestParts<Arc<AppState>> for ShellLayout {
    type Rejection = HtmlError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let SessionUser(user) = parts.extensions.get::<SessionUser>().cloned().ok_or_else(|| {
            html_error(StatusCode::UNAUTHORIZED, "not signed in")
        })?;
        let params = Query::<ShellParams>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_default();
        let jar = CookieJar::from_headers(&parts.headers);
        let flash = read_flash(&jar);

        let mut layout = ShellLayout::new(
            parts.uri.path(),
            user,
            params.menu.as_deref() == Some("open"),
        );
        layout.notice = flash.map(|notice| notice.view());
        layout.flash_seen = jar.get(FLASH_COOKIE).is_some();
        layout.cookie_secure = state.config.auth.cookie_secure;
        Ok(layout)
    }
}

/// Renders a page inside the shell, clearing the flash cookie once it has been shown.
pub fn render_page<T: Template>(
    layout: &ShellLayout,
    page: &T,
    what: &'static str,
) -> Result<Response, HtmlError> {
    render_with_status(layout, page, StatusCode::OK, what)
}

pub fn render_with_status<T: Template>(
    layout: &ShellLayout,
    page: &T,
    status: StatusCode,
    what: &'static str,
) -> Result<Response, HtmlError> {
    let rendered = page.render().map_err(|err| {
        tracing::error!(error = %err, page = what, "template render failed");
        html_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to render page")
    })?;
    let mut jar = CookieJar::new();
    if layout.flash_seen {
        jar = jar.add(expired_cookie(FLASH_COOKIE, layout.cookie_secure));
    }
    Ok((status, jar, Html(rendered)).into_response())
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    status: u16,
    message: &'a str,
}

pub fn html_error(status: StatusCode, message: &str) -> HtmlError {
    let page = ErrorPage {
        status: status.as_u16(),
        message,
    };
    match page.render() {
        Ok(rendered) => (status, Html(rendered)),
        Err(_) => (status, Html(status.to_string())),
    }
}

/// Service failures surface as an error page carrying the matching status.
pub fn page_error(err: AppError) -> HtmlError {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), error = %err, "page failed");
    }
    html_error(status, err.message())
}
