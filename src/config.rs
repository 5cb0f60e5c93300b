use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub superuser_email: Option<String>,
    pub superuser_password: Option<String>,
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("superuser_email", &self.superuser_email)
            .field("superuser_password", &"<redacted>")
            .finish()
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            superuser_email: env::var("SUPERUSER_EMAIL").ok(),
            superuser_password: env::var("SUPERUSER_PASSWORD").ok(),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
