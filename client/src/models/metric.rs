//! Metric data models.
//!
//! A metric query returns a flat sequence of data points; when server-side
//! rollup is requested, the sequence is expected to hold exactly one point
//! aggregating the whole window.

use serde::{Deserialize, Serialize};

/// One sample of a metric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDataPoint {
    /// Start of the sample interval, epoch milliseconds.
    pub start_time_in_millis: i64,

    /// The sample value.
    pub value: i64,

    /// Minimum observed within the interval.
    pub min: i64,

    /// Maximum observed within the interval.
    pub max: i64,

    /// Most recent observation within the interval.
    pub current: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_data_point_deserialization() {
        let json = r#"{
            "startTimeInMillis": 1372982000000,
            "value": 120,
            "min": 80,
            "max": 310,
            "current": 95
        }"#;

        let point: MetricDataPoint = serde_json::from_str(json).unwrap();

        assert_eq!(point.start_time_in_millis, 1_372_982_000_000);
        assert_eq!(point.value, 120);
        assert_eq!(point.min, 80);
        assert_eq!(point.max, 310);
        assert_eq!(point.current, 95);
    }

    #[test]
    fn test_metric_data_point_missing_field_fails() {
        let json = r#"{"startTimeInMillis": 0, "value": 1, "min": 0, "max": 2}"#;
        let result: Result<MetricDataPoint, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }
}
