use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::employee::Employee;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee": "John Doe",
        "document": "CC-1020304",
        "date": "2026-01-05",
        "overtime_hours": 2.5,
        "absent": false
    })
)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: u64,

    /// Name of the employee the record belongs to
    #[sqlx(rename = "employee_name")]
    #[schema(example = "John Doe")]
    pub employee: String,

    /// Identity document of the employee
    #[schema(example = "CC-1020304")]
    pub document: String,

    #[sqlx(rename = "record_date")]
    #[schema(example = "2026-01-05", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = 2.5)]
    pub overtime_hours: f64,

    #[schema(example = false)]
    pub absent: bool,
}

impl AttendanceRecord {
    /// Negative and NaN hour values never count as overtime.
    pub fn has_overtime(&self) -> bool {
        self.overtime_hours > 0.0
    }

    pub fn absence_label(&self) -> &'static str {
        if self.absent { "Yes" } else { "No" }
    }
}

/// Both collections as read by a single load.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceSnapshot {
    pub employees: Vec<Employee>,
    pub records: Vec<AttendanceRecord>,
    pub loaded_at: DateTime<Utc>,
}
