//! Postgres access
//!
//! Raw parameterized SQL only. The validator has already established that
//! every statement reaching this layer is a single SELECT, so there is no
//! entity mapping and no transaction handling; rows come back as JSON
//! objects in select-list column order.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sea_orm::{ConnectOptions, DatabaseConnection, DbBackend, FromQueryResult, Statement};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::models::DatabaseConfig;
use crate::utils::error::Result;

/// Row-returning query execution as the endpoints see it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run one validated statement with positional parameters.
    async fn fetch_rows(&self, sql: &str, params: &[Value]) -> Result<Vec<Value>>;
}

/// Live Postgres-backed executor.
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool. Called once at startup.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(30))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let connection = sea_orm::Database::connect(options).await?;
        info!("Database connection established");
        Ok(Self { connection })
    }
}

#[async_trait]
impl QueryExecutor for Database {
    async fn fetch_rows(&self, sql: &str, params: &[Value]) -> Result<Vec<Value>> {
        debug!("Executing query with {} parameters", params.len());
        let values: Vec<sea_orm::Value> = params.iter().map(bind_value).collect();
        let statement = Statement::from_sql_and_values(DbBackend::Postgres, sql, values);
        let rows = Value::find_by_statement(statement)
            .all(&self.connection)
            .await
            .map_err(|e| {
                error!("Query execution failed: {}", e);
                e
            })?;
        Ok(rows)
    }
}

/// Positional parameter conversion. Date parameters arrive as strings and
/// Postgres casts them server-side, so strings bind as strings.
fn bind_value(param: &Value) -> sea_orm::Value {
    match param {
        Value::Null => sea_orm::Value::String(None),
        Value::Bool(flag) => sea_orm::Value::Bool(Some(*flag)),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                sea_orm::Value::BigInt(Some(int))
            } else {
                sea_orm::Value::Double(number.as_f64())
            }
        }
        Value::String(text) => sea_orm::Value::String(Some(Box::new(text.clone()))),
        other => sea_orm::Value::String(Some(Box::new(other.to_string()))),
    }
}
