use crate::{
    auth::{
        SessionStatus, TokenBundle, User,
        jwt::{JwtKeys, decode_token, encode_token, make_session_claims},
        session::SessionContext,
    },
    error::AppError,
};

/// Session operations plus the signed token that binds a client to the live session.
#[derive(Clone, Copy)]
pub struct AuthService<'a> {
    session: &'a SessionContext,
    jwt: &'a JwtKeys,
    ttl_secs: usize,
}

impl<'a> AuthService<'a> {
    pub fn new(session: &'a SessionContext, jwt: &'a JwtKeys, ttl_secs: usize) -> Self {
        Self {
            session,
            jwt,
            ttl_secs,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<TokenBundle, AppError> {
        let user = self.session.login(email, password).await?;
        self.issue(user)
    }

    pub fn issue(&self, user: User) -> Result<TokenBundle, AppError> {
        let claims = make_session_claims(&user, self.ttl_secs);
        let access_token = encode_token(self.jwt, &claims)?;
        Ok(TokenBundle {
            access_token,
            token_type: "Bearer",
            expires_in: self.ttl_secs,
            user,
        })
    }

    /// Accepts a token only while its subject is the signed-in operator.
    pub fn verify(&self, token: &str) -> Result<User, AppError> {
        let claims = decode_token(self.jwt, token)?;
        match self.session.status() {
            SessionStatus::Authenticated(user) if user.id == claims.sub => Ok(user),
            SessionStatus::Loading => Err(AppError::unauthorized("Session is still loading")),
            _ => Err(AppError::unauthorized("Session has ended")),
        }
    }

    pub fn logout(&self) -> Result<(), AppError> {
        self.session.logout()
    }

    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        self.session.forgot_password(email).await
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use super::*;
    use crate::{
        auth::{account::OperatorAccount, storage::MemoryStorage},
        config::AuthConfig,
    };

    fn session() -> SessionContext {
        let account = OperatorAccount::from_config(&AuthConfig::default()).expect("account");
        let session = SessionContext::new(Arc::new(MemoryStorage::new()), account, Duration::ZERO);
        session.init();
        session
    }

    #[tokio::test]
    async fn login_issues_a_token_that_verifies() {
        let session = session();
        let jwt = JwtKeys::from_secret(b"auth-service-secret");
        let service = AuthService::new(&session, &jwt, 3600);

        let bundle = service
            .login("admin@example.com", "password")
            .await
            .expect("login");

        assert_eq!(bundle.token_type, "Bearer");
        assert_eq!(bundle.expires_in, 3600);
        assert_eq!(service.verify(&bundle.access_token).expect("verify"), bundle.user);
    }

    #[tokio::test]
    async fn logout_invalidates_issued_tokens() {
        let session = session();
        let jwt = JwtKeys::from_secret(b"auth-service-secret");
        let service = AuthService::new(&session, &jwt, 3600);
        let bundle = service
            .login("admin@example.com", "password")
            .await
            .expect("login");

        service.logout().expect("logout");
        let err = service
            .verify(&bundle.access_token)
            .expect_err("token should be rejected");

        assert_eq!(err, AppError::unauthorized("Session has ended"));
    }

    #[test]
    fn token_for_another_subject_is_rejected() {
        let session = session();
        let jwt = JwtKeys::from_secret(b"auth-service-secret");
        let service = AuthService::new(&session, &jwt, 3600);
        let stranger = User {
            id: "99".to_string(),
            email: "stranger@example.com".to_string(),
            name: "Stranger".to_string(),
        };

        let bundle = service.issue(stranger).expect("issue");

        assert!(service.verify(&bundle.access_token).is_err());
    }

    #[test]
    fn garbage_token_is_unauthorized() {
        let session = session();
        let jwt = JwtKeys::from_secret(b"auth-service-secret");
        let service = AuthService::new(&session, &jwt, 3600);

        let err = service.verify("not-a-token").expect_err("should fail");

        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
