pub mod account;
pub mod bootstrap;
pub mod jwt;
pub mod password;
pub mod session;
pub mod storage;
mod types;

pub use types::{Claims, SessionStatus, TokenBundle, User};
