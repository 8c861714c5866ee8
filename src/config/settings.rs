use anyhow::{Context, Result};

pub const MEMORY_DATABASE: &str = ":memory:";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "tournament.db".to_string(),
            pool_size: 4,
        }
    }
}

impl DatabaseSettings {
    pub fn in_memory() -> Self {
        Self {
            path: MEMORY_DATABASE.to_string(),
            pool_size: 1,
        }
    }

    pub fn is_memory(&self) -> bool {
        self.path == MEMORY_DATABASE
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `DATABASE_PATH` and `DATABASE_POOL_SIZE`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut database = DatabaseSettings::default();

        if let Ok(path) = std::env::var("DATABASE_PATH") {
            database.path = path;
        }

        if let Ok(size) = std::env::var("DATABASE_POOL_SIZE") {
            database.pool_size = size
                .parse()
                .with_context(|| format!("Invalid DATABASE_POOL_SIZE: {}", size))?;
        }

        Ok(Self { database })
    }

    pub fn with_database_path(mut self, path: &str) -> Self {
        self.database.path = path.to_string();
        self
    }
}
