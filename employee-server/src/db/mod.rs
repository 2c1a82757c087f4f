//! Database Module
//!
//! Embedded SurrealDB: RocksDB on disk, or in-memory for tests and
//! `DATABASE_PATH=memory`.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::core::Config;
use crate::utils::AppError;

/// Employee table schema, applied on every startup.
///
/// `age` is range-checked here and nowhere else.
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS employee SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS first_name ON employee TYPE string;
DEFINE FIELD IF NOT EXISTS last_name ON employee TYPE string;
DEFINE FIELD IF NOT EXISTS age ON employee TYPE int ASSERT $value >= 20 AND $value <= 70;
DEFINE FIELD IF NOT EXISTS date_of_joining ON employee TYPE string;
DEFINE FIELD IF NOT EXISTS title ON employee TYPE string;
DEFINE FIELD IF NOT EXISTS department ON employee TYPE string;
DEFINE FIELD IF NOT EXISTS employee_type ON employee TYPE string;
DEFINE FIELD IF NOT EXISTS current_status ON employee TYPE bool DEFAULT true;
DEFINE FIELD IF NOT EXISTS created_at ON employee TYPE datetime DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS employee_type_idx ON employee FIELDS employee_type;
"#;

/// Database service - owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the database described by `config` and apply the schema
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let db = if config.is_memory_database() {
            Surreal::new::<Mem>(())
                .await
                .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?
        } else {
            if let Some(parent) = Path::new(&config.database_path).parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::database(format!("Failed to create database directory: {e}"))
                })?;
            }
            Surreal::new::<RocksDb>(config.database_path.as_str())
                .await
                .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?
        };

        db.use_ns(config.database_namespace.as_str())
            .use_db(config.database_name.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            path = %config.database_path,
            namespace = %config.database_namespace,
            database = %config.database_name,
            "Database connection established (SurrealDB)"
        );

        Self::apply_schema(&db).await?;

        Ok(Self { db })
    }

    async fn apply_schema(db: &Surreal<Db>) -> Result<(), AppError> {
        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
        tracing::info!("Database schema applied");
        Ok(())
    }
}
