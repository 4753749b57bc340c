//! Tooltip content: a small label/value fact table built from operator
//! metrics. Painting (and the HTML it becomes) belongs to the renderer.

use qplan_core::{OperatorMetrics, PlanDocument};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub rows: Vec<TooltipRow>,
}

/// Fact table for one operator, or `None` when there are no metrics to show.
/// Actual row counters appear only when present; the estimated rows, row
/// size, and data size always follow.
pub fn metrics_tooltip(metrics: Option<&OperatorMetrics<'_, '_>>) -> Option<TooltipContent> {
    let metrics = metrics?;
    let mut buf = ryu_js::Buffer::new();
    let mut rows = Vec::with_capacity(5);
    if let Some(actual) = metrics.actual_rows() {
        rows.push(row("Actual Number of Rows", js_number(actual, &mut buf)));
    }
    if let Some(read) = metrics.actual_rows_read() {
        rows.push(row("Number of Rows Read", js_number(read, &mut buf)));
    }
    rows.push(row(
        "Estimated Number of Rows",
        js_number(metrics.estimated_rows(), &mut buf),
    ));
    rows.push(row(
        "Estimated Row Size",
        convert_size(metrics.estimated_row_size()),
    ));
    rows.push(row(
        "Estimated Data Size",
        convert_size(metrics.estimated_data_size()),
    ));
    Some(TooltipContent { rows })
}

/// Hover-side lookup for a connector via its correlation ids.
pub fn connector_tooltip(
    plan: &PlanDocument<'_>,
    statement_id: &str,
    node_id: Option<&str>,
) -> Option<TooltipContent> {
    let element = plan.resolve(statement_id, node_id)?;
    let metrics = OperatorMetrics::from_node(element).ok()?;
    metrics_tooltip(Some(&metrics))
}

fn row(label: &str, value: String) -> TooltipRow {
    TooltipRow {
        label: label.to_string(),
        value,
    }
}

/// Byte counts as humans read them: bytes under 10,000, then KB, then MB,
/// rounding half away from zero on the displayed unit only.
pub fn convert_size(bytes: u64) -> String {
    if bytes < 10_000 {
        return format!("{bytes} B");
    }
    let kb = bytes as f64 / 1024.0;
    if kb < 10_000.0 {
        return format!("{} KB", kb.round());
    }
    format!("{} MB", (kb / 1024.0).round())
}

/// Row counts display the way a JS UI would print its numbers: whole values
/// without a trailing `.0`, shortest round-trippable decimals otherwise.
fn js_number(value: f64, buf: &mut ryu_js::Buffer) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let value = if value == 0.0 { 0.0 } else { value };
    buf.format_finite(value).to_string()
}
