//! SQLite persistence for finished detection records.
//!
//! This crate stores the prediction records the relay receives back from the
//! detection service, using SQLx with SQLite. Persistence is an optional
//! collaborator: the relay works without it, and write failures never affect
//! the user-visible reply.
//!
//! # Example
//!
//! ```no_run
//! use prediction_store::PredictionStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let store = PredictionStore::connect("sqlite:argus.db?mode=rwc").await?;
//!     store.migrate().await?;
//!
//!     let count = prediction_store::prediction::count_predictions(store.pool()).await?;
//!     println!("{} stored predictions", count);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod prediction;

pub use error::{DatabaseError, Result};
pub use models::PredictionRecord;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Prediction database connection wrapper.
#[derive(Debug, Clone)]
pub struct PredictionStore {
    pool: SqlitePool,
}

impl PredictionStore {
    /// Default pool size for database connections.
    /// Sized for concurrent message processing.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`;
    /// use `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to prediction store: {}", url);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Prediction store migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detector_client::{Label, Prediction};

    async fn test_store() -> PredictionStore {
        let store = PredictionStore::connect("sqlite::memory:").await.unwrap();
        store.migrate().await.unwrap();
        store
    }

    fn sample_prediction(id: &str) -> Prediction {
        Prediction {
            prediction_id: id.to_string(),
            original_img_path: "uploads/42/dog.jpg".to_string(),
            predicted_img_path: None,
            labels: vec![Label {
                class: "dog".to_string(),
                cx: 0.4,
                cy: 0.6,
                width: 0.1,
                height: 0.2,
            }],
            time: 1700000000.0,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = test_store().await;

        let record = PredictionRecord::from_prediction(
            &sample_prediction("p-1"),
            42,
            "uploads/42/dog.jpg",
        )
        .unwrap();
        prediction::insert_prediction(store.pool(), &record)
            .await
            .unwrap();

        let fetched = prediction::get_prediction(store.pool(), "p-1").await.unwrap();
        assert_eq!(fetched, record);
        assert_eq!(fetched.labels().unwrap()[0].class, "dog");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = test_store().await;
        let result = prediction::get_prediction(store.pool(), "nope").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_for_chat_newest_first() {
        let store = test_store().await;

        for (id, time) in [("p-1", 100.0), ("p-2", 200.0)] {
            let mut prediction = sample_prediction(id);
            prediction.time = time;
            let record =
                PredictionRecord::from_prediction(&prediction, 42, "uploads/42/dog.jpg").unwrap();
            prediction::insert_prediction(store.pool(), &record)
                .await
                .unwrap();
        }

        let records = prediction::list_predictions_for_chat(store.pool(), 42)
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].prediction_id, "p-2");

        assert!(prediction::list_predictions_for_chat(store.pool(), 7)
            .await
            .unwrap()
            .is_empty());
    }
}
