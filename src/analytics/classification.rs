//! Presence classification of attendance records.
//!
//! A record is either present or absent. Overtime is reported on top of
//! that: a record with overtime hours always counts as present, even when
//! its absence flag is set.

use serde::Serialize;
use strum_macros::{Display, EnumIter};
use utoipa::ToSchema;

use crate::model::attendance::AttendanceRecord;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumIter, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[strum(to_string = "Present Employees")]
    Present,
    #[strum(to_string = "Absent Employees")]
    Absent,
    #[strum(to_string = "Employees with Overtime")]
    Overtime,
}

impl Category {
    pub fn matches(self, record: &AttendanceRecord) -> bool {
        match self {
            Category::Present => !record.absent || record.has_overtime(),
            Category::Absent => record.absent && !record.has_overtime(),
            Category::Overtime => record.has_overtime(),
        }
    }
}

/// Employee names per category, one entry per matching record, in record order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, ToSchema)]
pub struct Classification {
    #[schema(example = json!(["John Doe", "Jane Roe"]))]
    pub present: Vec<String>,
    #[schema(example = json!(["Max Poe"]))]
    pub absent: Vec<String>,
    #[schema(example = json!(["Jane Roe"]))]
    pub overtime: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryCounts {
    #[schema(example = 2)]
    pub present: usize,
    #[schema(example = 1)]
    pub absent: usize,
    #[schema(example = 1)]
    pub overtime: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Present => self.present,
            Category::Absent => self.absent,
            Category::Overtime => self.overtime,
        }
    }
}

pub fn classify<'a, I>(records: I) -> Classification
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let mut out = Classification::default();

    for record in records {
        if Category::Overtime.matches(record) {
            out.overtime.push(record.employee.clone());
        }
        if Category::Absent.matches(record) {
            out.absent.push(record.employee.clone());
        }
        if Category::Present.matches(record) {
            out.present.push(record.employee.clone());
        }
    }

    out
}

impl Classification {
    pub fn names(&self, category: Category) -> &[String] {
        match category {
            Category::Present => &self.present,
            Category::Absent => &self.absent,
            Category::Overtime => &self.overtime,
        }
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            present: self.present.len(),
            absent: self.absent.len(),
            overtime: self.overtime.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use strum::IntoEnumIterator;

    fn record(employee: &str, overtime_hours: f64, absent: bool) -> AttendanceRecord {
        AttendanceRecord {
            id: 0,
            employee: employee.into(),
            document: format!("DOC-{employee}"),
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            overtime_hours,
            absent,
        }
    }

    #[test]
    fn sorts_records_into_categories() {
        let records = vec![
            record("Ana", 0.0, false),
            record("Luis", 2.0, false),
            record("Marta", 0.0, true),
            record("Pedro", 1.5, true),
        ];

        let c = classify(&records);

        assert_eq!(c.present, vec!["Ana", "Luis", "Pedro"]);
        assert_eq!(c.absent, vec!["Marta"]);
        assert_eq!(c.overtime, vec!["Luis", "Pedro"]);
        assert_eq!(
            c.counts(),
            CategoryCounts { present: 3, absent: 1, overtime: 2 }
        );
    }

    #[test]
    fn present_and_absent_cover_every_record_once() {
        let records: Vec<_> = (0..40)
            .map(|i| record(&format!("E{i}"), (i % 4) as f64 - 1.0, i % 3 == 0))
            .collect();

        let c = classify(&records);
        let counts = c.counts();

        assert_eq!(counts.present + counts.absent, records.len());
        assert!(counts.overtime <= counts.present);
        for name in &c.overtime {
            assert!(c.present.contains(name));
            assert!(!c.absent.contains(name));
        }
    }

    #[test]
    fn repeated_employee_is_listed_per_record() {
        let records = vec![record("Ana", 1.0, false), record("Ana", 3.0, false)];

        let c = classify(&records);

        assert_eq!(c.overtime, vec!["Ana", "Ana"]);
        assert_eq!(c.present, vec!["Ana", "Ana"]);
    }

    #[test]
    fn empty_input_gives_empty_lists() {
        let c = classify(&[]);
        assert_eq!(c, Classification::default());
        assert_eq!(c.counts(), CategoryCounts::default());
    }

    #[test]
    fn negative_overtime_on_absent_record_is_absent() {
        let c = classify(&[record("Rosa", -2.0, true)]);
        assert_eq!(c.absent, vec!["Rosa"]);
        assert!(c.overtime.is_empty());
        assert!(c.present.is_empty());
    }

    #[test]
    fn labels_follow_fixed_order() {
        let labels: Vec<String> = Category::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Present Employees", "Absent Employees", "Employees with Overtime"]
        );
    }

    #[test]
    fn names_and_counts_agree_per_category() {
        let records = vec![record("Ana", 0.0, true), record("Luis", 4.0, false)];
        let c = classify(&records);
        let counts = c.counts();

        for category in Category::iter() {
            assert_eq!(c.names(category).len(), counts.get(category));
        }
    }
}
