use anyhow::{Result, bail};

use super::{AppConfig, defaults};

const MIN_ADMIN_PASSWORD_LEN: usize = 8;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    let auth = &cfg.auth;
    if auth.admin_id.trim().is_empty() {
        errors.push("auth.admin_id must not be empty".to_string());
    }

    if !auth.admin_email.contains('@') {
        errors.push(format!(
            "auth.admin_email must be an email address (got {:?})",
            auth.admin_email
        ));
    }

    if auth.admin_name.trim().is_empty() {
        errors.push("auth.admin_name must not be empty".to_string());
    }

    if auth.admin_password.len() < MIN_ADMIN_PASSWORD_LEN {
        errors.push(format!(
            "auth.admin_password must be at least {MIN_ADMIN_PASSWORD_LEN} characters"
        ));
    }

    if auth.jwt_secret.trim().is_empty() {
        errors.push("auth.jwt_secret must not be empty".to_string());
    } else if !cfg!(debug_assertions) && auth.jwt_secret == defaults::DEFAULT_JWT_SECRET {
        errors.push("auth.jwt_secret must be changed in release builds".to_string());
    }

    if auth.token_ttl_secs == 0 {
        errors.push("auth.token_ttl_secs must be > 0".to_string());
    }

    if auth.storage_dir.trim().is_empty() {
        errors.push("auth.storage_dir must not be empty".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        validate(&AppConfig::default()).expect("defaults should validate");
    }

    #[test]
    fn reports_every_problem_at_once() {
        let mut cfg = AppConfig::default();
        cfg.general.host = " ".to_string();
        cfg.auth.admin_email = "admin".to_string();
        cfg.auth.admin_password = "short".to_string();
        cfg.auth.token_ttl_secs = 0;

        let message = validate(&cfg).expect_err("config should fail").to_string();

        assert!(message.contains("general.host"));
        assert!(message.contains("auth.admin_email"));
        assert!(message.contains("auth.admin_password"));
        assert!(message.contains("auth.token_ttl_secs"));
        assert!(!message.contains("auth.storage_dir"));
    }
}
