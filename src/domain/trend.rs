// Trend record domain model
use serde::Deserialize;
use serde_json::Value;

/// The distinguished key holding each record's timestamp.
pub const TIMESTAMP_KEY: &str = "timestamp";

/// One timestamped data point from the trends API: a `timestamp` field plus
/// one or more named numeric metrics. Deserialized straight from a JSON
/// object; key order is preserved, and metric-key discovery order is the
/// first record's document order.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct TrendRecord {
    fields: serde_json::Map<String, Value>,
}

impl TrendRecord {
    /// The raw timestamp value, if the record carries one.
    pub fn timestamp(&self) -> Option<&Value> {
        self.fields.get(TIMESTAMP_KEY)
    }

    /// Metric keys in document order, timestamp excluded.
    pub fn metric_keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|key| *key != TIMESTAMP_KEY)
    }

    /// Numeric value for a metric key. Absent or non-numeric values read as
    /// `None`, which becomes a gap in the dataset rather than an error.
    pub fn metric(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }
}

/// A chart label taken from a record's timestamp field: either an RFC-style
/// date string or a numeric epoch, passed through to the renderer verbatim.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum TimestampLabel {
    Text(String),
    Epoch(f64),
}

impl TimestampLabel {
    /// Build a label from a raw timestamp value. Only strings and numbers
    /// are valid timestamps.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(Self::Epoch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> TrendRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_metric_keys_preserve_document_order() {
        let r = record(json!({"timestamp": "2024-01-01", "writes": 2, "reads": 1}));
        let keys: Vec<&str> = r.metric_keys().collect();
        assert_eq!(keys, vec!["writes", "reads"]);
    }

    #[test]
    fn test_metric_values() {
        let r = record(json!({"timestamp": 1704067200000i64, "reads": 7.5, "note": "n/a"}));
        assert_eq!(r.metric("reads"), Some(7.5));
        assert_eq!(r.metric("writes"), None);
        // Non-numeric values read as missing, not as errors
        assert_eq!(r.metric("note"), None);
    }

    #[test]
    fn test_timestamp_label_from_value() {
        assert_eq!(
            TimestampLabel::from_value(&json!("2024-01-01")),
            Some(TimestampLabel::Text("2024-01-01".to_string()))
        );
        assert_eq!(
            TimestampLabel::from_value(&json!(1704067200000i64)),
            Some(TimestampLabel::Epoch(1704067200000.0))
        );
        assert_eq!(TimestampLabel::from_value(&json!(["nope"])), None);
    }

    #[test]
    fn test_label_serializes_untagged() {
        let text = serde_json::to_string(&TimestampLabel::Text("2024-01-01".into())).unwrap();
        assert_eq!(text, "\"2024-01-01\"");
        let epoch = serde_json::to_string(&TimestampLabel::Epoch(5.0)).unwrap();
        assert_eq!(epoch, "5.0");
    }
}
