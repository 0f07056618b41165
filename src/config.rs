use std::sync::LazyLock;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration, merged from defaults and the process environment
/// (`.env` is loaded by `dotenvy` before this runs). The Gmail pair stays
/// optional: the email route rejects sends when either half is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub smtp_relay: String,
    pub gmail_user: Option<String>,
    pub gmail_app_password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:data/mufattish.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            smtp_relay: "smtp.gmail.com".to_string(),
            gmail_user: None,
            gmail_app_password: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&[
                "database_url",
                "listen_addr",
                "loglevel",
                "smtp_relay",
                "gmail_user",
                "gmail_app_password",
            ]))
            .extract()
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| {
        eprintln!("invalid configuration: {e}");
        std::process::exit(1);
    })
});
