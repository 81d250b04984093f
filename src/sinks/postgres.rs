use anyhow::{Context, Result};
use sqlx::{Connection, PgConnection};

use crate::record::CallRecord;

/// Insert one result row into the configured table
///
/// Opens a fresh connection for the single auto-committed insert and closes
/// it on return. Every value is bound as a parameter; only the table name is
/// formatted into the statement, since identifiers cannot be bound.
pub async fn insert_record(database_url: &str, table: &str, record: &CallRecord) -> Result<()> {
    let mut conn = PgConnection::connect(database_url)
        .await
        .context("Failed to connect to the database")?;

    let statement = format!(
        "INSERT INTO {} (date, time, uuid, result, phone, duration, answer_text)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
        table
    );

    sqlx::query(&statement)
        .bind(&record.date)
        .bind(&record.time)
        .bind(&record.uuid)
        .bind(&record.result)
        .bind(&record.phone)
        .bind(record.duration)
        .bind(&record.text)
        .execute(&mut conn)
        .await
        .with_context(|| format!("Failed to insert result row into {}", table))?;

    conn.close()
        .await
        .context("Failed to close the database connection")?;

    Ok(())
}
