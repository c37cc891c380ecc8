use std::env;

use crate::error::ConfigError;

pub const DEFAULT_COLLECTION: &str = "text_collection";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo {
        uri: String,
        database: String,
        collection: String,
    },
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub store: StoreBackend,
    /// `dev` gets human-readable logs, anything else gets JSON.
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let raw_port = required("PORT")?;
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw_port.clone(),
            })?;

        let store = match lookup("TEXT_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("mongo") => StoreBackend::Mongo {
                uri: required("DATABASE_URI")?,
                database: required("DATABASE_NAME")?,
                collection: lookup("TEXT_COLLECTION")
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "TEXT_STORE",
                    value: other.to_string(),
                })
            }
        };

        let environment = lookup("APP_ENVIRONMENT").unwrap_or_else(|| "dev".to_string());

        Ok(Self {
            port,
            store,
            environment,
        })
    }

    pub fn is_dev(&self) -> bool {
        self.environment == "dev"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_mongo_settings() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("DATABASE_URI", "mongodb://localhost:27017"),
            ("DATABASE_NAME", "texts"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert!(config.is_dev());
        assert_eq!(
            config.store,
            StoreBackend::Mongo {
                uri: "mongodb://localhost:27017".into(),
                database: "texts".into(),
                collection: DEFAULT_COLLECTION.into(),
            }
        );
    }

    #[test]
    fn missing_database_name_is_fatal() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("DATABASE_URI", "mongodb://localhost:27017"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Missing("DATABASE_NAME")));
    }

    #[test]
    fn missing_port_is_fatal() {
        let err = AppConfig::from_lookup(lookup_from(&[("TEXT_STORE", "memory")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("PORT")));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty"), ("TEXT_STORE", "memory")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    }

    #[test]
    fn memory_store_needs_no_database() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("TEXT_STORE", "memory"),
            ("APP_ENVIRONMENT", "production"),
        ]))
        .unwrap();

        assert_eq!(config.store, StoreBackend::Memory);
        assert!(!config.is_dev());
    }

    #[test]
    fn rejects_unknown_store() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "3000"), ("TEXT_STORE", "redis")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "TEXT_STORE", .. }));
    }
}
