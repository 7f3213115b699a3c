use std::sync::Arc;

use crate::{
    auth::{bootstrap::init_session, jwt::JwtKeys, session::SessionContext},
    config::AppConfig,
    data::{DataContext, StubDelay},
};

pub struct AppState {
    pub config: AppConfig,
    pub session: Arc<SessionContext>,
    pub jwt: JwtKeys,
    pub data: DataContext,
}

impl AppState {
    pub fn new(config: AppConfig, session: Arc<SessionContext>, data: DataContext) -> Arc<Self> {
        let jwt = JwtKeys::from_secret(config.auth.jwt_secret.as_bytes());
        Arc::new(Self {
            config,
            session,
            jwt,
            data,
        })
    }

    /// Composition root: file-backed session plus seeded stub data.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Arc<Self>> {
        let session = init_session(&config.auth)?;
        let data = DataContext::seeded(StubDelay::new(config.data.stub_delay()));
        Ok(Self::new(config, session, data))
    }
}
