use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub assets_dir: String,
    pub completion: CompletionConfig,
    pub kv_store: Option<KvStoreConfig>,
}

/// Settings for the external chat-completion API.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct KvStoreConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup; `from_env` passes the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => database_url_from_parts(&get)?,
        };
        let host = get("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_port(get("APP_PORT"), 8000).context("invalid APP_PORT")?;
        let assets_dir = get("ASSETS_DIR").unwrap_or_else(|| "assets".to_string());

        let completion = CompletionConfig {
            api_key: get("OPENAI_API_KEY").filter(|key| !key.trim().is_empty()),
            base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: get("OPENAI_MODEL").unwrap_or_else(|| "gpt-3.5-turbo".to_string()),
        };

        let kv_store = match get("REDIS_HOST") {
            Some(host) => Some(KvStoreConfig {
                host,
                port: parse_port(get("REDIS_PORT"), 6379).context("invalid REDIS_PORT")?,
            }),
            None => None,
        };

        Ok(Self {
            port,
            database_url,
            host,
            assets_dir,
            completion,
            kv_store,
        })
    }
}

fn database_url_from_parts(get: &impl Fn(&str) -> Option<String>) -> anyhow::Result<String> {
    let host = get("DB_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = parse_port(get("DB_PORT"), 5432).context("invalid DB_PORT")?;
    let user = get("DB_USER").unwrap_or_else(|| "postgres".to_string());
    let password = get("DB_PASSWORD").unwrap_or_default();
    let name = get("DB_NAME").unwrap_or_else(|| "tayib_db".to_string());
    Ok(format!("postgres://{user}:{password}@{host}:{port}/{name}"))
}

fn parse_port(raw: Option<String>, default: u16) -> anyhow::Result<u16> {
    match raw {
        Some(value) => Ok(value.trim().parse::<u16>()?),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn builds_database_url_from_parts() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DB_HOST", "db"),
            ("DB_USER", "tayib"),
            ("DB_PASSWORD", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "postgres://tayib:secret@db:5432/tayib_db");
        assert_eq!(config.port, 8000);
        assert_eq!(config.completion.model, "gpt-3.5-turbo");
        assert!(config.completion.api_key.is_none());
        assert!(config.kv_store.is_none());
    }

    #[test]
    fn database_url_overrides_parts() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DB_HOST", "ignored"),
            ("REDIS_HOST", "cache"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        let kv = config.kv_store.unwrap();
        assert_eq!((kv.host.as_str(), kv.port), ("cache", 6379));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let result = AppConfig::from_lookup(lookup(&[("APP_PORT", "eighty")]));
        assert!(result.is_err());
    }
}
