pub mod auth_service;
pub mod banner_service;
pub mod contact_service;
pub mod context;
pub mod customer_service;
pub mod dashboard_service;
pub mod food_draft;
pub mod food_service;
pub mod transaction_service;

pub use context::ServiceContext;
