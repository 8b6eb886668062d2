use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub jwt: JwtConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Which storage implementation backs the stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,

    #[serde(default = "default_token_expiry")]
    pub token_expiry_secs: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Telegram ids granted the admin role at registration.
    #[serde(default)]
    pub admin_telegram_ids: Vec<i64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_backend() -> StorageBackend {
    StorageBackend::Postgres
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_token_expiry() -> i64 {
    86_400
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with AT__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("AT").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(config::ConfigError::Message)?;
        Ok(cfg)
    }

    /// Rejects configurations that cannot possibly start.
    fn validate(&self) -> Result<(), String> {
        if self.jwt.secret.is_empty() {
            return Err("jwt.secret must be set".to_string());
        }
        if self.storage.backend == StorageBackend::Postgres && self.database.url.is_empty() {
            return Err("database.url must be set for the postgres backend".to_string());
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], self.server.port)))
    }

    /// Pool settings in the shape the persistence crate expects.
    pub fn database_config(&self) -> persistence::db::DatabaseConfig {
        persistence::db::DatabaseConfig {
            url: self.database.url.clone(),
            max_connections: self.database.max_connections,
            min_connections: self.database.min_connections,
            connect_timeout_secs: self.database.connect_timeout_secs,
            idle_timeout_secs: self.database.idle_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config(backend: StorageBackend, db_url: &str, secret: &str) -> Config {
        Config {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                request_timeout_secs: default_request_timeout(),
            },
            storage: StorageConfig { backend },
            database: DatabaseConfig {
                url: db_url.to_string(),
                max_connections: default_max_connections(),
                min_connections: default_min_connections(),
                connect_timeout_secs: default_connect_timeout(),
                idle_timeout_secs: default_idle_timeout(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            jwt: JwtConfig {
                secret: secret.to_string(),
                token_expiry_secs: default_token_expiry(),
            },
            security: SecurityConfig {
                cors_origins: vec![],
                admin_telegram_ids: vec![],
            },
        }
    }

    #[test]
    fn test_validate_requires_jwt_secret() {
        let cfg = base_config(StorageBackend::Memory, "", "");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_memory_backend_needs_no_database_url() {
        let cfg = base_config(StorageBackend::Memory, "", "secret");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_postgres_backend_requires_database_url() {
        let cfg = base_config(StorageBackend::Postgres, "", "secret");
        assert!(cfg.validate().is_err());

        let cfg = base_config(
            StorageBackend::Postgres,
            "postgres://localhost/attendance",
            "secret",
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = base_config(StorageBackend::Memory, "", "secret");
        assert_eq!(cfg.socket_addr().port(), 8080);
    }

    #[test]
    fn test_database_config_mapping() {
        let cfg = base_config(
            StorageBackend::Postgres,
            "postgres://localhost/attendance",
            "secret",
        );
        let db = cfg.database_config();
        assert_eq!(db.url, "postgres://localhost/attendance");
        assert_eq!(db.max_connections, default_max_connections());
        assert_eq!(db.idle_timeout_secs, default_idle_timeout());
    }

    #[test]
    fn test_storage_backend_deserialization() {
        let backend: StorageBackend = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(backend, StorageBackend::Memory);
    }
}
