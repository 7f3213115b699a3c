use std::sync::Arc;

use axum::{Router, middleware};

use crate::{
    auth::{bootstrap::build_session, storage::MemoryStorage},
    config::AppConfig,
    data::{DataContext, StubDelay},
    middleware::{catch_panic_layer, json_error_middleware},
    routes::router,
    state::AppState,
};

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_EMAIL: &str = "admin@example.com";
pub const TEST_PASSWORD: &str = "password";

/// Defaults with every artificial delay removed.
pub fn test_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.auth.jwt_secret = TEST_SECRET.to_string();
    cfg.auth.delay_ms = 0;
    cfg.data.stub_delay_ms = 0;
    cfg
}

/// In-memory session storage and freshly seeded stub data.
pub fn test_state() -> Arc<AppState> {
    test_state_with(DataContext::seeded(StubDelay::none()))
}

pub fn test_state_with(data: DataContext) -> Arc<AppState> {
    let cfg = test_config();
    let session =
        build_session(&cfg.auth, Arc::new(MemoryStorage::new())).expect("build test session");
    session.init();
    AppState::new(cfg, Arc::new(session), data)
}

/// Full router with the same layers the binary installs.
pub fn test_router(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}
