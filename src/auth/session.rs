use std::{
    sync::{Arc, PoisonError, RwLock},
    time::Duration,
};

use super::{
    SessionStatus, User,
    account::OperatorAccount,
    storage::{KeyValueStorage, StorageError, read_json, write_json},
};
use crate::error::AppError;

pub const SESSION_KEY: &str = "user";

#[derive(Debug, Default)]
struct SessionState {
    initialized: bool,
    pending: usize,
    user: Option<User>,
}

/// Holds the signed-in operator and mirrors it into durable storage.
///
/// Starts in the loading state until [`SessionContext::init`] restores any stored
/// session. `login` and `forgot_password` also report loading while they run.
pub struct SessionContext {
    storage: Arc<dyn KeyValueStorage>,
    account: OperatorAccount,
    delay: Duration,
    state: RwLock<SessionState>,
}

impl SessionContext {
    pub fn new(storage: Arc<dyn KeyValueStorage>, account: OperatorAccount, delay: Duration) -> Self {
        Self {
            storage,
            account,
            delay,
            state: RwLock::new(SessionState::default()),
        }
    }

    pub fn account(&self) -> &OperatorAccount {
        &self.account
    }

    /// Restore a prior session. Corrupt or unreadable data means "logged out".
    pub fn init(&self) -> SessionStatus {
        let restored = match read_json::<User>(self.storage.as_ref(), SESSION_KEY) {
            Ok(user) => user,
            Err(err @ StorageError::Parse { .. }) => {
                tracing::warn!(error = %err, "discarding corrupt stored session");
                if let Err(err) = self.storage.remove_item(SESSION_KEY) {
                    tracing::warn!(error = %err, "failed to clear corrupt session");
                }
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "stored session unreadable");
                None
            }
        };

        if let Some(user) = restored.as_ref() {
            tracing::info!(email = %user.email, "restored operator session");
        }

        {
            let mut state = self.write_state();
            state.user = restored;
            state.initialized = true;
        }
        self.status()
    }

    /// A signed-in operator stays authenticated while another login or reset is in flight.
    pub fn status(&self) -> SessionStatus {
        let state = self.read_state();
        if !state.initialized {
            return SessionStatus::Loading;
        }
        match state.user.as_ref() {
            Some(user) => SessionStatus::Authenticated(user.clone()),
            None if state.pending > 0 => SessionStatus::Loading,
            None => SessionStatus::Unauthenticated,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status(), SessionStatus::Loading)
    }

    pub fn current_user(&self) -> Option<User> {
        self.read_state().user.clone()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let _loading = self.begin_loading();
        tokio::time::sleep(self.delay).await;

        if !self.account.matches(email, password)? {
            tracing::warn!(email = %email, "rejected operator login");
            return Err(AppError::invalid_credentials());
        }

        let user = self.account.user().clone();
        write_json(self.storage.as_ref(), SESSION_KEY, &user)?;
        self.write_state().user = Some(user.clone());
        tracing::info!(email = %user.email, "operator logged in");
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), AppError> {
        let previous = self.write_state().user.take();
        self.storage.remove_item(SESSION_KEY)?;
        if let Some(user) = previous {
            tracing::info!(email = %user.email, "operator logged out");
        }
        Ok(())
    }

    /// No mail is sent; only the known operator email is accepted.
    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        let _loading = self.begin_loading();
        tokio::time::sleep(self.delay).await;

        if !self.account.knows_email(email) {
            return Err(AppError::email_not_found());
        }
        tracing::info!(email = %email, "password reset requested");
        Ok(())
    }

    fn begin_loading(&self) -> LoadingGuard<'_> {
        self.write_state().pending += 1;
        LoadingGuard { state: &self.state }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

struct LoadingGuard<'a> {
    state: &'a RwLock<SessionState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.pending = state.pending.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::storage::{FileStorage, MemoryStorage},
        config::AuthConfig,
    };

    fn account() -> OperatorAccount {
        OperatorAccount::from_config(&AuthConfig::default()).expect("account")
    }

    fn session_over(storage: Arc<dyn KeyValueStorage>) -> SessionContext {
        SessionContext::new(storage, account(), Duration::ZERO)
    }

    #[test]
    fn loading_until_init() {
        let session = session_over(Arc::new(MemoryStorage::new()));

        assert_eq!(session.status(), SessionStatus::Loading);
        assert_eq!(session.init(), SessionStatus::Unauthenticated);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn login_accepts_only_the_fixed_pair() {
        let session = session_over(Arc::new(MemoryStorage::new()));
        session.init();

        for (email, password) in [
            ("admin@example.com", "wrong"),
            ("someone@example.com", "password"),
            ("", ""),
            ("admin@example.com ", "password"),
        ] {
            let err = session
                .login(email, password)
                .await
                .expect_err("login should fail");
            assert_eq!(err, AppError::invalid_credentials());
        }
        assert_eq!(session.status(), SessionStatus::Unauthenticated);

        let user = session
            .login("admin@example.com", "password")
            .await
            .expect("login should succeed");

        assert_eq!(user.name, "Admin User");
        assert_eq!(session.status(), SessionStatus::Authenticated(user));
    }

    #[tokio::test]
    async fn session_survives_reload_until_logout() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(dir.path()));

        let first = session_over(storage.clone());
        first.init();
        let user = first
            .login("admin@example.com", "password")
            .await
            .expect("login should succeed");

        let reloaded = session_over(Arc::new(FileStorage::new(dir.path())));
        assert_eq!(reloaded.init(), SessionStatus::Authenticated(user));

        reloaded.logout().expect("logout");
        assert_eq!(reloaded.status(), SessionStatus::Unauthenticated);

        let after_logout = session_over(Arc::new(FileStorage::new(dir.path())));
        assert_eq!(after_logout.init(), SessionStatus::Unauthenticated);
    }

    #[test]
    fn corrupt_stored_session_is_discarded() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(SESSION_KEY, "{\"id\": 1").expect("seed corrupt value");
        let session = session_over(storage.clone());

        assert_eq!(session.init(), SessionStatus::Unauthenticated);
        assert_eq!(storage.get_item(SESSION_KEY).expect("get"), None);
    }

    #[tokio::test]
    async fn loading_flag_clears_after_failed_login() {
        let session = Arc::new(SessionContext::new(
            Arc::new(MemoryStorage::new()),
            account(),
            Duration::from_millis(50),
        ));
        session.init();

        let pending = {
            let session = session.clone();
            tokio::spawn(async move { session.login("admin@example.com", "nope").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(session.is_loading());

        let result = pending.await.expect("task should join");
        assert!(result.is_err());
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn failed_login_in_flight_keeps_a_signed_in_operator() {
        let session = Arc::new(SessionContext::new(
            Arc::new(MemoryStorage::new()),
            account(),
            Duration::from_millis(50),
        ));
        session.init();
        let user = session
            .login("admin@example.com", "password")
            .await
            .expect("login should succeed");

        let pending = {
            let session = session.clone();
            tokio::spawn(async move { session.login("intruder@example.com", "guess").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(session.status(), SessionStatus::Authenticated(user.clone()));

        assert!(pending.await.expect("task should join").is_err());
        assert_eq!(session.status(), SessionStatus::Authenticated(user));
    }

    #[tokio::test]
    async fn forgot_password_knows_only_the_operator() {
        let session = session_over(Arc::new(MemoryStorage::new()));
        session.init();

        session
            .forgot_password("admin@example.com")
            .await
            .expect("known email");
        let err = session
            .forgot_password("nobody@example.com")
            .await
            .expect_err("unknown email");

        assert_eq!(err, AppError::email_not_found());
    }
}
