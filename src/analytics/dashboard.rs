//! Server-rendered attendance dashboard.
//!
//! The page carries both chart configs as JSON blocks and lets Chart.js
//! draw them client side. Tables are rendered in full on the server.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;

use crate::analytics::charts::ChartConfig;
use crate::analytics::service::AnalyticsView;
use crate::analytics::tables::{CATEGORY_HEADERS, DETAIL_HEADERS};
use crate::error::AnalyticsError;

pub const PAGE_TITLE: &str = "Attendance Data Analysis";
const CHART_HEIGHT_PX: u32 = 300;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    fn main_class(self) -> &'static str {
        match self {
            Theme::Light => "main",
            Theme::Dark => "main dark",
        }
    }
}

pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// JSON that is safe inside a `<script>` element.
fn script_json(config: &ChartConfig) -> Result<String, AnalyticsError> {
    let json = serde_json::to_string(config)?;
    Ok(json
        .replace('&', "\\u0026")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e"))
}

fn header_row(headers: &[&str]) -> String {
    let cells: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();
    format!("<tr>{cells}</tr>")
}

fn body_row(cells: &[&str]) -> String {
    let cells: String = cells
        .iter()
        .map(|c| format!("<td>{}</td>", escape_html(c)))
        .collect();
    format!("<tr>{cells}</tr>")
}

fn chart_panel(id: &str, title: &str) -> String {
    format!(
        r#"<div class="chart">
        <h3>{title}</h3>
        <div style="height: {CHART_HEIGHT_PX}px; width: 100%">
          <canvas id="{id}-chart"></canvas>
        </div>
      </div>"#,
        title = escape_html(title),
    )
}

pub fn render_dashboard(
    view: &AnalyticsView<'_>,
    theme: Theme,
    chart_js_url: &str,
) -> Result<String, AnalyticsError> {
    let bar_json = script_json(&view.bar_chart())?;
    let pie_json = script_json(&view.pie_chart())?;

    let detail_body: String = view
        .detail_rows()
        .iter()
        .map(|row| {
            let overtime = row.overtime_hours.to_string();
            body_row(&[
                row.employee.as_str(),
                row.document.as_str(),
                row.date.as_str(),
                overtime.as_str(),
                row.absence.as_str(),
            ])
        })
        .collect();

    let category_body: String = view
        .category_rows()
        .iter()
        .map(|row| body_row(&[row.category.as_str(), row.employees.as_str()]))
        .collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
  <div class="{main_class}">
    <div class="analytics-container">
      <h2>{title}</h2>
      <div class="charts-container">
      {bar_panel}
      {pie_panel}
      </div>

      <h3>Attendance Details</h3>
      <table>
        <thead>{detail_head}</thead>
        <tbody>{detail_body}</tbody>
      </table>

      <h3>Employees by Status</h3>
      <table>
        <thead>{category_head}</thead>
        <tbody>{category_body}</tbody>
      </table>
    </div>
  </div>
  <script type="application/json" id="bar-config">{bar_json}</script>
  <script type="application/json" id="pie-config">{pie_json}</script>
  <script src="{chart_js_url}"></script>
  <script>
    for (const id of ["bar", "pie"]) {{
      const config = JSON.parse(document.getElementById(id + "-config").textContent);
      new Chart(document.getElementById(id + "-chart"), config);
    }}
  </script>
</body>
</html>
"#,
        title = escape_html(PAGE_TITLE),
        main_class = theme.main_class(),
        bar_panel = chart_panel("bar", "Employee Distribution"),
        pie_panel = chart_panel("pie", "Employees by Status"),
        detail_head = header_row(&DETAIL_HEADERS),
        category_head = header_row(&CATEGORY_HEADERS),
        chart_js_url = escape_html(chart_js_url),
    ))
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; }
.main { min-height: 100vh; background: #f5f5f5; color: #222; }
.main.dark { background: #1b1b1b; color: #e6e6e6; }
.analytics-container { max-width: 1100px; margin: 0 auto; padding: 24px; }
.charts-container { display: flex; flex-wrap: wrap; gap: 24px; }
.chart { flex: 1 1 420px; background: rgba(127, 127, 127, 0.08); padding: 16px; border-radius: 8px; }
table { width: 100%; border-collapse: collapse; margin-bottom: 24px; }
th, td { padding: 8px 10px; border-bottom: 1px solid rgba(127, 127, 127, 0.3); text-align: left; }
th { background: #810551; color: #fff; }
.main.dark th { background: #05454d; }
"#;
