pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 3000;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";

pub const DEFAULT_JWT_SECRET: &str = "super-secret-change-me";
pub const DEFAULT_ADMIN_ID: &str = "1";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_NAME: &str = "Admin User";
pub const DEFAULT_ADMIN_PASSWORD: &str = "password";
pub const DEFAULT_STORAGE_DIR: &str = "data";
pub const DEFAULT_AUTH_DELAY_MS: i64 = 1000;
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 8 * 60 * 60;
pub const DEFAULT_COOKIE_SECURE: bool = false;

pub const DEFAULT_STUB_DELAY_MS: i64 = 500;
