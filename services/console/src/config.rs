use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

use crate::directory::UserRecord;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_METRICS_BIND: &str = "0.0.0.0:9090";
pub const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 86_400;

// Console configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub cookie_secure: bool,
    pub session_max_age_secs: u64,
    /// Replaces the built-in user directory when set.
    pub users: Option<Vec<UserRecord>>,
}

#[derive(Debug, Deserialize)]
struct ConsoleConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    cookie_secure: Option<bool>,
    session_max_age_secs: Option<u64>,
    users: Option<Vec<UserRecord>>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            metrics_bind: SocketAddr::from(([0, 0, 0, 0], 9090)),
            cookie_secure: false,
            session_max_age_secs: DEFAULT_SESSION_MAX_AGE_SECS,
            users: None,
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("PERCEIVE_CONSOLE_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()
            .with_context(|| "parse PERCEIVE_CONSOLE_BIND")?;
        let metrics_bind = std::env::var("PERCEIVE_METRICS_BIND")
            .unwrap_or_else(|_| DEFAULT_METRICS_BIND.to_string())
            .parse()
            .with_context(|| "parse PERCEIVE_METRICS_BIND")?;
        let cookie_secure = match std::env::var("PERCEIVE_COOKIE_SECURE") {
            Ok(value) => parse_bool(&value).with_context(|| "parse PERCEIVE_COOKIE_SECURE")?,
            Err(_) => false,
        };
        let session_max_age_secs = match std::env::var("PERCEIVE_SESSION_MAX_AGE") {
            Ok(value) => value
                .parse()
                .with_context(|| "parse PERCEIVE_SESSION_MAX_AGE")?,
            Err(_) => DEFAULT_SESSION_MAX_AGE_SECS,
        };
        Ok(Self {
            bind_addr,
            metrics_bind,
            cookie_secure,
            session_max_age_secs,
            users: None,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("PERCEIVE_CONSOLE_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read PERCEIVE_CONSOLE_CONFIG: {path}"))?;
            config.apply_yaml(&contents)?;
        }
        Ok(config)
    }

    fn apply_yaml(&mut self, contents: &str) -> Result<()> {
        let override_cfg: ConsoleConfigOverride =
            serde_yaml::from_str(contents).with_context(|| "parse console config yaml")?;
        if let Some(value) = override_cfg.bind_addr {
            self.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
        }
        if let Some(value) = override_cfg.metrics_bind {
            self.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
        }
        if let Some(value) = override_cfg.cookie_secure {
            self.cookie_secure = value;
        }
        if let Some(value) = override_cfg.session_max_age_secs {
            self.session_max_age_secs = value;
        }
        if let Some(users) = override_cfg.users {
            self.users = Some(users);
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}
