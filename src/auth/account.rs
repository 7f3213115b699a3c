use crate::{
    auth::{
        User,
        password::{hash_password, verify_password},
    },
    config::AuthConfig,
    error::AppError,
};

/// The single operator allowed into the console.
#[derive(Debug, Clone)]
pub struct OperatorAccount {
    user: User,
    password_hash: String,
}

impl OperatorAccount {
    pub fn new(user: User, password: &str) -> Result<Self, AppError> {
        Ok(Self {
            user,
            password_hash: hash_password(password)?,
        })
    }

    pub fn from_config(cfg: &AuthConfig) -> Result<Self, AppError> {
        let user = User {
            id: cfg.admin_id.clone(),
            email: cfg.admin_email.clone(),
            name: cfg.admin_name.clone(),
        };
        Self::new(user, &cfg.admin_password)
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn knows_email(&self, email: &str) -> bool {
        self.user.email == email
    }

    pub fn matches(&self, email: &str, password: &str) -> Result<bool, AppError> {
        if !self.knows_email(email) {
            return Ok(false);
        }
        verify_password(password, &self.password_hash)
    }
}
