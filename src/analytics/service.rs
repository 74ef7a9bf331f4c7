use chrono::{DateTime, NaiveDate, Utc};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::analytics::charts::{self, ChartConfig};
use crate::analytics::classification::{CategoryCounts, Classification, classify};
use crate::analytics::tables::{self, CategoryRow, DetailRow};
use crate::error::AnalyticsError;
use crate::model::attendance::{AttendanceRecord, AttendanceSnapshot};
use crate::utils::snapshot_loader::load_snapshot;

/// The cache holds at most one snapshot
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
struct SnapshotKey;

#[derive(Clone)]
pub struct AnalyticsService {
    pool: MySqlPool,
    cache: Cache<SnapshotKey, Arc<AttendanceSnapshot>>,
}

impl AnalyticsService {
    pub fn new(pool: MySqlPool, ttl: Duration) -> Self {
        Self {
            pool,
            cache: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
        }
    }

    /// Cached snapshot, or a fresh load. Concurrent misses share one load.
    pub async fn snapshot(&self) -> Result<Arc<AttendanceSnapshot>, AnalyticsError> {
        self.cache
            .try_get_with(SnapshotKey, async {
                debug!("Snapshot cache miss, loading from database");
                load_snapshot(&self.pool).await.map(Arc::new)
            })
            .await
            .map_err(AnalyticsError::Database)
    }

    /// Drops the cached snapshot and loads a new one.
    pub async fn refresh(&self) -> Result<Arc<AttendanceSnapshot>, AnalyticsError> {
        self.cache.invalidate(&SnapshotKey).await;
        let snapshot = self.snapshot().await?;
        info!(
            employees = snapshot.employees.len(),
            records = snapshot.records.len(),
            "Attendance snapshot refreshed"
        );
        Ok(snapshot)
    }

    pub async fn prime(&self, snapshot: AttendanceSnapshot) {
        self.cache.insert(SnapshotKey, Arc::new(snapshot)).await;
    }
}

/// Inclusive date bounds, either side optional.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    #[schema(example = "2026-01-01", value_type = Option<String>, format = "date")]
    pub from: Option<NaiveDate>,
    #[schema(example = "2026-01-31", value_type = Option<String>, format = "date")]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, AnalyticsError> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(AnalyticsError::InvalidRange { from, to });
            }
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Summary {
    #[schema(example = 12)]
    pub total_records: usize,
    #[schema(example = 8)]
    pub total_employees: usize,
    pub counts: CategoryCounts,
    pub categories: Classification,
    pub range: DateRange,
    #[schema(value_type = String, format = "date-time")]
    pub loaded_at: DateTime<Utc>,
}

/// Everything the dashboard shows, derived from one snapshot.
pub struct AnalyticsView<'a> {
    pub snapshot: &'a AttendanceSnapshot,
    pub range: DateRange,
    pub records: Vec<&'a AttendanceRecord>,
    pub classification: Classification,
    pub counts: CategoryCounts,
}

impl<'a> AnalyticsView<'a> {
    pub fn build(snapshot: &'a AttendanceSnapshot, range: DateRange) -> Self {
        let records: Vec<&AttendanceRecord> = snapshot
            .records
            .iter()
            .filter(|r| range.contains(r.date))
            .collect();
        let classification = classify(records.iter().copied());
        let counts = classification.counts();

        Self {
            snapshot,
            range,
            records,
            classification,
            counts,
        }
    }

    pub fn bar_chart(&self) -> ChartConfig {
        charts::bar_chart(&self.counts)
    }

    pub fn pie_chart(&self) -> ChartConfig {
        charts::pie_chart(&self.counts)
    }

    pub fn detail_rows(&self) -> Vec<DetailRow> {
        tables::detail_rows(self.records.iter().copied())
    }

    pub fn category_rows(&self) -> Vec<CategoryRow> {
        tables::category_rows(&self.classification)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total_records: self.records.len(),
            total_employees: self.snapshot.employees.len(),
            counts: self.counts,
            categories: self.classification.clone(),
            range: self.range,
            loaded_at: self.snapshot.loaded_at,
        }
    }
}
