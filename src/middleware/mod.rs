mod guards;
mod json_error;
mod panic;

pub use guards::{AuthGuard, SESSION_COOKIE, SessionUser, require_session};
pub(crate) use guards::{expired_cookie, session_cookie};
pub use json_error::json_error_middleware;
pub use panic::catch_panic_layer;
