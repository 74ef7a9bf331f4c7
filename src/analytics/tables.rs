use serde::Serialize;
use strum::IntoEnumIterator;
use utoipa::ToSchema;

use crate::analytics::classification::{Category, Classification};
use crate::model::attendance::AttendanceRecord;

pub const DETAIL_HEADERS: [&str; 5] = ["Employee", "Document", "Date", "Overtime Hours", "Absence"];
pub const CATEGORY_HEADERS: [&str; 2] = ["Category", "Employees"];

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DetailRow {
    #[schema(example = "John Doe")]
    pub employee: String,
    #[schema(example = "CC-1020304")]
    pub document: String,
    #[schema(example = "2026-01-05")]
    pub date: String,
    #[schema(example = 2.5)]
    pub overtime_hours: f64,
    #[schema(example = "No")]
    pub absence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryRow {
    #[schema(example = "Present Employees")]
    pub category: String,
    #[schema(example = "John Doe, Jane Roe")]
    pub employees: String,
}

pub fn detail_rows<'a, I>(records: I) -> Vec<DetailRow>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records
        .into_iter()
        .map(|r| DetailRow {
            employee: r.employee.clone(),
            document: r.document.clone(),
            date: r.date.format("%Y-%m-%d").to_string(),
            overtime_hours: r.overtime_hours,
            absence: r.absence_label().to_string(),
        })
        .collect()
}

pub fn category_rows(classification: &Classification) -> Vec<CategoryRow> {
    Category::iter()
        .map(|category| CategoryRow {
            category: category.to_string(),
            employees: classification.names(category).join(", "),
        })
        .collect()
}
