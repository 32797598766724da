// Chart builder - Pure transformation of trend records into chart payloads
use crate::domain::chart::{
    AxisOptions, AxisScale, ChartData, ChartDataset, ChartError, ChartOptions, FILL_ALPHA,
    LegendOptions, LegendPosition, PluginOptions, POINT_RADIUS, ScaleOptions, TitleOptions,
};
use crate::domain::color::hex_to_rgba;
use crate::domain::trend::{TimestampLabel, TrendRecord};

/// Build the chart payload for an ordered, non-empty record sequence.
///
/// Labels are each record's timestamp, in order. Metric keys come from the
/// first record in document order; later records are trusted to share that
/// key set, and a record missing a key yields a `null` gap at that index
/// rather than an error. Colors are assigned cyclically from the palette in
/// key-discovery order, so identical input always yields identical colors.
pub fn build_chart_data(
    records: &[TrendRecord],
    palette: &[String],
) -> Result<ChartData, ChartError> {
    let first = records.first().ok_or(ChartError::EmptyRecords)?;
    if palette.is_empty() {
        return Err(ChartError::EmptyPalette);
    }

    let labels = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let value = record
                .timestamp()
                .ok_or(ChartError::MissingTimestamp { index })?;
            TimestampLabel::from_value(value).ok_or(ChartError::InvalidTimestamp { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let datasets = first
        .metric_keys()
        .enumerate()
        .map(|(i, key)| {
            let color = &palette[i % palette.len()];
            ChartDataset {
                label: key.to_string(),
                fill: true,
                data: records.iter().map(|record| record.metric(key)).collect(),
                border_color: color.clone(),
                background_color: hex_to_rgba(color, FILL_ALPHA),
                point_radius: POINT_RADIUS,
            }
        })
        .collect();

    Ok(ChartData { labels, datasets })
}

/// Static display options: responsive sizing, legend at the top, a title
/// block shown only for a non-empty title, and a continuous time x axis.
pub fn chart_options(title: Option<&str>) -> ChartOptions {
    let title = title.unwrap_or("");
    ChartOptions {
        responsive: true,
        plugins: PluginOptions {
            legend: LegendOptions {
                position: LegendPosition::Top,
            },
            title: TitleOptions {
                display: !title.is_empty(),
                text: title.to_string(),
            },
        },
        scales: ScaleOptions {
            x: AxisOptions {
                scale_type: AxisScale::Timeseries,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trend::TimestampLabel;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<TrendRecord> {
        serde_json::from_value(value).unwrap()
    }

    fn palette(colors: &[&str]) -> Vec<String> {
        colors.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_build_chart_data_end_to_end() {
        let records = records(json!([
            {"timestamp": "2024-01-01", "a": 1, "b": 2},
            {"timestamp": "2024-01-02", "a": 3, "b": 4},
        ]));
        let chart = build_chart_data(&records, &palette(&["#000000", "#ffffff"])).unwrap();

        assert_eq!(
            chart.labels,
            vec![
                TimestampLabel::Text("2024-01-01".to_string()),
                TimestampLabel::Text("2024-01-02".to_string()),
            ]
        );
        assert_eq!(chart.datasets.len(), 2);

        let a = &chart.datasets[0];
        assert_eq!(a.label, "a");
        assert_eq!(a.data, vec![Some(1.0), Some(3.0)]);
        assert_eq!(a.border_color, "#000000");
        assert_eq!(a.background_color, "rgba(0, 0, 0, 0.4)");
        assert!(a.fill);
        assert_eq!(a.point_radius, 2);

        let b = &chart.datasets[1];
        assert_eq!(b.label, "b");
        assert_eq!(b.data, vec![Some(2.0), Some(4.0)]);
        assert_eq!(b.border_color, "#ffffff");
    }

    #[test]
    fn test_empty_records_is_an_explicit_error() {
        let err = build_chart_data(&[], &palette(&["#000000"])).unwrap_err();
        assert_eq!(err, ChartError::EmptyRecords);
    }

    #[test]
    fn test_empty_palette_is_an_explicit_error() {
        let records = records(json!([{"timestamp": 1, "a": 1}]));
        let err = build_chart_data(&records, &[]).unwrap_err();
        assert_eq!(err, ChartError::EmptyPalette);
    }

    #[test]
    fn test_missing_timestamp_is_an_explicit_error() {
        let records = records(json!([
            {"timestamp": "2024-01-01", "a": 1},
            {"a": 2},
        ]));
        let err = build_chart_data(&records, &palette(&["#000000"])).unwrap_err();
        assert_eq!(err, ChartError::MissingTimestamp { index: 1 });
    }

    #[test]
    fn test_non_scalar_timestamp_is_an_explicit_error() {
        let records = records(json!([{"timestamp": {"nested": true}, "a": 1}]));
        let err = build_chart_data(&records, &palette(&["#000000"])).unwrap_err();
        assert_eq!(err, ChartError::InvalidTimestamp { index: 0 });
    }

    #[test]
    fn test_missing_metric_value_becomes_a_gap() {
        // Later records are trusted, not validated; a missing key is a null gap
        let records = records(json!([
            {"timestamp": 1, "a": 1, "b": 2},
            {"timestamp": 2, "a": 3},
        ]));
        let chart = build_chart_data(&records, &palette(&["#000000", "#ffffff"])).unwrap();
        assert_eq!(chart.datasets[1].data, vec![Some(2.0), None]);
    }

    #[test]
    fn test_palette_wraps_around_when_exhausted() {
        let records = records(json!([
            {"timestamp": 1, "a": 1, "b": 2, "c": 3},
        ]));
        let chart = build_chart_data(&records, &palette(&["#111111", "#222222"])).unwrap();
        assert_eq!(chart.datasets[0].border_color, "#111111");
        assert_eq!(chart.datasets[1].border_color, "#222222");
        assert_eq!(chart.datasets[2].border_color, "#111111");
    }

    #[test]
    fn test_color_assignment_is_deterministic() {
        let records = records(json!([
            {"timestamp": "2024-01-01", "x": 1, "y": 2, "z": 3},
        ]));
        let colors = palette(&["#aa0000", "#00aa00", "#0000aa"]);
        let first = build_chart_data(&records, &colors).unwrap();
        let second = build_chart_data(&records, &colors).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_chart_options_title_block() {
        let without = chart_options(None);
        assert!(!without.plugins.title.display);
        assert_eq!(without.plugins.title.text, "");

        let blank = chart_options(Some(""));
        assert!(!blank.plugins.title.display);

        let with = chart_options(Some("Foo"));
        assert!(with.plugins.title.display);
        assert_eq!(with.plugins.title.text, "Foo");
        assert!(with.responsive);
        assert_eq!(with.plugins.legend.position, LegendPosition::Top);
        assert_eq!(with.scales.x.scale_type, AxisScale::Timeseries);
    }
}
