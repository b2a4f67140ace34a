//! Prediction record operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::PredictionRecord;

/// Insert a finished prediction record.
pub async fn insert_prediction(pool: &SqlitePool, record: &PredictionRecord) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO predictions (prediction_id, chat_id, source_key, annotated_key, labels_json, finished_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.prediction_id)
    .bind(record.chat_id)
    .bind(&record.source_key)
    .bind(&record.annotated_key)
    .bind(&record.labels_json)
    .bind(record.finished_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get a prediction record by id.
pub async fn get_prediction(pool: &SqlitePool, prediction_id: &str) -> Result<PredictionRecord> {
    sqlx::query_as::<_, PredictionRecord>(
        r#"
        SELECT prediction_id, chat_id, source_key, annotated_key, labels_json, finished_at
        FROM predictions
        WHERE prediction_id = ?
        "#,
    )
    .bind(prediction_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        id: prediction_id.to_string(),
    })
}

/// List prediction records for a chat, newest first.
pub async fn list_predictions_for_chat(
    pool: &SqlitePool,
    chat_id: i64,
) -> Result<Vec<PredictionRecord>> {
    let records = sqlx::query_as::<_, PredictionRecord>(
        r#"
        SELECT prediction_id, chat_id, source_key, annotated_key, labels_json, finished_at
        FROM predictions
        WHERE chat_id = ?
        ORDER BY finished_at DESC
        "#,
    )
    .bind(chat_id)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

/// Count stored prediction records.
pub async fn count_predictions(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM predictions
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
