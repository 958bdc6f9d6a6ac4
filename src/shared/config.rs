use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    pub database: DatabaseConfig,
    pub migration: MigrationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Upper bound on in-flight remote writes within one entity type.
    pub max_concurrent_writes: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite://hauler.db".to_string(),
                max_connections: 5,
            },
            migration: MigrationConfig {
                max_concurrent_writes: 4,
            },
        }
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            max_concurrent_writes: 4,
        }
    }
}
