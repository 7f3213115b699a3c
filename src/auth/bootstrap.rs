use std::sync::Arc;

use crate::{config::AuthConfig, error::AppError};

use super::{
    account::OperatorAccount,
    session::SessionContext,
    storage::{FileStorage, KeyValueStorage},
};

pub fn build_session(
    cfg: &AuthConfig,
    storage: Arc<dyn KeyValueStorage>,
) -> Result<SessionContext, AppError> {
    let account = OperatorAccount::from_config(cfg)?;
    Ok(SessionContext::new(storage, account, cfg.delay()))
}

/// File-backed session, restored from the configured storage directory.
pub fn init_session(cfg: &AuthConfig) -> anyhow::Result<Arc<SessionContext>> {
    let storage = FileStorage::new(cfg.storage_path());
    tracing::info!(dir = %storage.root().display(), "using session storage");

    let session = build_session(cfg, Arc::new(storage))
        .map_err(|err| anyhow::anyhow!("operator account setup failed: {err}"))?;
    let status = session.init();
    tracing::info!(status = status.as_str(), "session initialized");
    Ok(Arc::new(session))
}
