pub mod auth;
pub mod banners;
pub mod contacts;
pub mod customers;
pub mod dashboard;
pub mod food;
pub mod layout;
pub mod not_found;
pub mod profile;
pub mod reports;
mod router;
pub mod transactions;

pub use router::router;
