use std::fmt;

/// Which store implementation serves requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// The `campgrounds` table in PostgreSQL
    Postgres,
    /// Process memory; data is lost on restart
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Postgres => f.write_str("postgres"),
            StoreBackend::Memory => f.write_str("memory"),
        }
    }
}

/// Server settings read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind, without the port
    pub bind_address: String,
    /// Port to listen on
    pub port: u16,
    /// PostgreSQL connection string
    pub database_url: String,
    /// Store implementation
    pub store_backend: StoreBackend,
    /// Exit at startup when the database cannot be reached
    pub db_startup_strict: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            database_url: postgres::database::DEFAULT_DATABASE_URL.to_string(),
            store_backend: StoreBackend::Postgres,
            db_startup_strict: true,
        }
    }
}

impl ServerConfig {
    /// Builds the config from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// missing or unparseable values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("⚠️ Ignoring invalid PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let store_backend = match lookup("STORE_BACKEND").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => StoreBackend::Postgres,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                log::warn!("⚠️ Unknown STORE_BACKEND {:?}, using postgres", other);
                StoreBackend::Postgres
            }
        };

        let db_startup_strict = match lookup("DB_STARTUP_STRICT") {
            Some(raw) => !matches!(raw.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"),
            None => defaults.db_startup_strict,
        };

        Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            store_backend,
            db_startup_strict,
        }
    }
}
