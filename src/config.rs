use anyhow::{Context, Result};
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://names.db";
pub const DEFAULT_LIST_LIMIT: u32 = 1005;

#[derive(Clone, Debug)]
pub struct PersonwebConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
    pub port: u16,
    pub list_limit: u32,
}

impl Default for PersonwebConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl PersonwebConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // split out so tests can feed variables without touching the process env
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let max_connections = parse_var(&lookup, "MAX_CONNECTIONS")?
            .unwrap_or(defaults.max_connections);

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);

        let list_limit = parse_var(&lookup, "LIST_LIMIT")?.unwrap_or(defaults.list_limit);

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            port,
            list_limit,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.bind_addr, self.port))
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Failed to parse {} value '{}'", key, raw)),
        None => Ok(None),
    }
}
