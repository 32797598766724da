// Rendering collaborator boundary
use crate::domain::chart::LineChart;
use anyhow::Context;
use std::io::Write;

/// The rendering collaborator. The view hands it either a full chart payload
/// or one of the static status messages.
pub trait ChartRenderer {
    fn render_chart(&mut self, chart: &LineChart) -> anyhow::Result<()>;
    fn render_message(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Writes the chart.js-shaped payload as pretty JSON to any writer. The
/// binary points this at stdout; anything that consumes chart.js input can
/// take the payload from there.
pub struct JsonRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ChartRenderer for JsonRenderer<W> {
    fn render_chart(&mut self, chart: &LineChart) -> anyhow::Result<()> {
        let payload =
            serde_json::to_string_pretty(chart).context("Failed to serialize chart payload")?;
        writeln!(self.writer, "{}", payload).context("Failed to write chart payload")?;
        Ok(())
    }

    fn render_message(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", text).context("Failed to write status message")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartData, ChartDataset, POINT_RADIUS};
    use crate::application::chart_builder::chart_options;
    use crate::domain::trend::TimestampLabel;

    #[test]
    fn test_render_message_writes_line() {
        let mut out = Vec::new();
        JsonRenderer::new(&mut out).render_message("loading...").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "loading...\n");
    }

    #[test]
    fn test_render_chart_writes_chart_js_payload() {
        let chart = LineChart {
            data: ChartData {
                labels: vec![TimestampLabel::Text("2024-01-01".to_string())],
                datasets: vec![ChartDataset {
                    label: "a".to_string(),
                    fill: true,
                    data: vec![Some(1.0)],
                    border_color: "#000000".to_string(),
                    background_color: "rgba(0, 0, 0, 0.4)".to_string(),
                    point_radius: POINT_RADIUS,
                }],
            },
            options: chart_options(Some("Foo")),
        };

        let mut out = Vec::new();
        JsonRenderer::new(&mut out).render_chart(&chart).unwrap();

        let payload: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(payload["data"]["labels"][0], "2024-01-01");
        assert_eq!(payload["data"]["datasets"][0]["borderColor"], "#000000");
        assert_eq!(payload["options"]["scales"]["x"]["type"], "timeseries");
        assert_eq!(payload["options"]["plugins"]["legend"]["position"], "top");
        assert_eq!(payload["options"]["plugins"]["title"]["text"], "Foo");
    }
}
