// Chart data and options domain models
use serde::Serialize;
use thiserror::Error;

use super::trend::TimestampLabel;

/// Fixed point marker radius for every dataset.
pub const POINT_RADIUS: u32 = 2;

/// Alpha applied to a dataset's border color to derive its fill color.
pub const FILL_ALPHA: f64 = 0.4;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("no trend records to chart")]
    EmptyRecords,
    #[error("color palette is empty")]
    EmptyPalette,
    #[error("trend record {index} is missing the timestamp field")]
    MissingTimestamp { index: usize },
    #[error("trend record {index} has a timestamp that is neither a string nor a number")]
    InvalidTimestamp { index: usize },
}

/// One line on the chart: a metric's values aligned 1:1 with the shared
/// label sequence. Serializes camelCase so the payload drops straight into a
/// chart.js-style renderer; `None` values become `null` gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub fill: bool,
    pub data: Vec<Option<f64>>,
    pub border_color: String,
    pub background_color: String,
    pub point_radius: u32,
}

/// Shared labels plus one dataset per metric, rebuilt fresh on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<TimestampLabel>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: PluginOptions,
    pub scales: ScaleOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub title: TitleOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub position: LegendPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleOptions {
    pub x: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisOptions {
    #[serde(rename = "type")]
    pub scale_type: AxisScale,
}

/// The x axis is a continuous time axis, so irregular intervals render
/// proportionally rather than as evenly spaced categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Timeseries,
}

/// The aggregate handed wholesale to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub data: ChartData,
    pub options: ChartOptions,
}
