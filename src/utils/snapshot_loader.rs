use chrono::Utc;
use futures_util::StreamExt;
use sqlx::MySqlPool;
use tracing::{debug, error};

use crate::model::attendance::{AttendanceRecord, AttendanceSnapshot};
use crate::model::employee::Employee;

/// Initial capacity for the attendance buffer
const RECORD_BATCH: usize = 500;

pub async fn fetch_employees(pool: &MySqlPool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, full_name, document, position, status
        FROM employees
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Streams every attendance record, oldest first.
pub async fn fetch_attendance_records(
    pool: &MySqlPool,
) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
    let mut stream = sqlx::query_as::<_, AttendanceRecord>(
        r#"
        SELECT id, employee_name, document, record_date, overtime_hours, absent
        FROM attendance_records
        ORDER BY record_date, id
        "#,
    )
    .fetch(pool);

    let mut records = Vec::with_capacity(RECORD_BATCH);

    while let Some(row) = stream.next().await {
        records.push(row?);

        if records.len() % RECORD_BATCH == 0 {
            debug!(loaded = records.len(), "Loading attendance records");
        }
    }

    log::info!("Attendance load complete: {} records", records.len());

    Ok(records)
}

/// Runs both fetches concurrently and stamps the result.
pub async fn load_snapshot(pool: &MySqlPool) -> Result<AttendanceSnapshot, sqlx::Error> {
    let (employees, records) =
        futures::try_join!(fetch_employees(pool), fetch_attendance_records(pool)).map_err(
            |e| {
                error!(error = %e, "Failed to load attendance snapshot");
                e
            },
        )?;

    Ok(AttendanceSnapshot {
        employees,
        records,
        loaded_at: Utc::now(),
    })
}
