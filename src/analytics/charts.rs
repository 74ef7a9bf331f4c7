//! Chart.js configurations for the category counts.

use once_cell::sync::Lazy;
use serde::Serialize;
use strum::IntoEnumIterator;
use utoipa::ToSchema;

use crate::analytics::classification::{Category, CategoryCounts};

pub const DATASET_LABEL: &str = "Employees";

const BACKGROUND_COLORS: [&str; 3] = ["#810551", "#05454d", "#333333"];
const BAR_BORDER_COLORS: [&str; 3] = ["#1E88E5", "#05454d", "#43A047"];
const BAR_BORDER_WIDTH: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<usize>,
    pub background_color: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Legend {
    #[schema(example = "top")]
    pub position: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Tooltip {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

// Sized by CSS on the container, hence no aspect ratio.
static CHART_OPTIONS: Lazy<ChartOptions> = Lazy::new(|| ChartOptions {
    responsive: true,
    maintain_aspect_ratio: false,
    plugins: Plugins {
        legend: Legend {
            position: "top".to_string(),
        },
        tooltip: Tooltip { enabled: true },
    },
    scales: Some(Scales {
        x: Axis { begin_at_zero: true },
        y: Axis { begin_at_zero: true },
    }),
});

fn labels() -> Vec<String> {
    Category::iter().map(|c| c.to_string()).collect()
}

fn series(counts: &CategoryCounts) -> Vec<usize> {
    Category::iter().map(|c| counts.get(c)).collect()
}

fn colors(palette: &[&str]) -> Vec<String> {
    palette.iter().map(|c| c.to_string()).collect()
}

pub fn bar_chart(counts: &CategoryCounts) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: labels(),
            datasets: vec![Dataset {
                label: Some(DATASET_LABEL.to_string()),
                data: series(counts),
                background_color: colors(&BACKGROUND_COLORS),
                border_color: Some(colors(&BAR_BORDER_COLORS)),
                border_width: Some(BAR_BORDER_WIDTH),
            }],
        },
        options: CHART_OPTIONS.clone(),
    }
}

/// Same data as the bar chart. Axes are dropped since a pie has none.
pub fn pie_chart(counts: &CategoryCounts) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Pie,
        data: ChartData {
            labels: labels(),
            datasets: vec![Dataset {
                label: None,
                data: series(counts),
                background_color: colors(&BACKGROUND_COLORS),
                border_color: None,
                border_width: None,
            }],
        },
        options: ChartOptions {
            scales: None,
            ..CHART_OPTIONS.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn counts() -> CategoryCounts {
        CategoryCounts {
            present: 7,
            absent: 2,
            overtime: 3,
        }
    }

    #[test]
    fn bar_chart_serializes_to_chart_js_shape() {
        let value = serde_json::to_value(bar_chart(&counts())).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "bar",
                "data": {
                    "labels": ["Present Employees", "Absent Employees", "Employees with Overtime"],
                    "datasets": [{
                        "label": "Employees",
                        "data": [7, 2, 3],
                        "backgroundColor": ["#810551", "#05454d", "#333333"],
                        "borderColor": ["#1E88E5", "#05454d", "#43A047"],
                        "borderWidth": 1
                    }]
                },
                "options": {
                    "responsive": true,
                    "maintainAspectRatio": false,
                    "plugins": {
                        "legend": { "position": "top" },
                        "tooltip": { "enabled": true }
                    },
                    "scales": {
                        "x": { "beginAtZero": true },
                        "y": { "beginAtZero": true }
                    }
                }
            })
        );
    }

    #[test]
    fn pie_chart_has_no_border_or_axes() {
        let value = serde_json::to_value(pie_chart(&counts())).unwrap();
        let dataset = &value["data"]["datasets"][0];

        assert_eq!(value["type"], "pie");
        assert_eq!(dataset["data"], json!([7, 2, 3]));
        assert_eq!(dataset["backgroundColor"], json!(["#810551", "#05454d", "#333333"]));
        assert!(dataset.get("borderColor").is_none());
        assert!(dataset.get("label").is_none());
        assert!(value["options"].get("scales").is_none());
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "top");
    }

    #[test]
    fn zero_counts_still_render_three_slices() {
        let chart = pie_chart(&CategoryCounts::default());
        assert_eq!(chart.data.labels.len(), 3);
        assert_eq!(chart.data.datasets[0].data, vec![0, 0, 0]);
    }
}
