pub mod auth;
pub mod banners;
pub mod contact;
pub mod customers;
pub mod dashboard;
pub mod food;
mod router;
pub mod transactions;

pub use router::router;
