//! Response mapping.
//!
//! Converts raw controller JSON into typed records. Every listing is a
//! top-level JSON array mapping 1:1 onto records; metric responses nest the
//! actual samples one level deeper. Decoding is strict: a payload that
//! cannot be parsed, or that lacks a required field, fails the whole
//! response. There is no partial success.

use crate::models::MetricDataPoint;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// A response that could not be mapped to the requested shape.
///
/// Carries the entity kind being decoded and the underlying parse error, so
/// a failing field can be diagnosed from the error chain.
#[derive(Debug, Error)]
#[error("malformed {entity} response: {source}")]
pub struct DecodeError {
    /// The entity listing that was being decoded.
    pub entity: &'static str,

    /// The underlying parse or missing-field error.
    #[source]
    pub source: serde_json::Error,
}

/// Decodes a top-level JSON array into typed records.
///
/// Each array element maps to exactly one record; order is preserved.
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is not valid JSON or an element
/// lacks a required field.
pub fn decode_records<T>(body: &str, entity: &'static str) -> Result<Vec<T>, DecodeError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|source| DecodeError { entity, source })
}

/// One element of a metric response envelope.
///
/// Elements without a `metricValues` array (absent or explicit null)
/// contribute zero samples.
#[derive(Debug, Deserialize)]
struct MetricSeries {
    #[serde(rename = "metricValues", default)]
    metric_values: Option<Vec<MetricDataPoint>>,
}

/// Decodes a metric envelope into a flat sequence of data points.
///
/// Samples from all envelope elements are flattened in relative order.
///
/// # Errors
///
/// Returns [`DecodeError`] if the envelope or any sample is malformed.
pub fn decode_metric_points(body: &str) -> Result<Vec<MetricDataPoint>, DecodeError> {
    let series: Vec<MetricSeries> = decode_records(body, "metric")?;
    Ok(series
        .into_iter()
        .flat_map(|s| s.metric_values.unwrap_or_default())
        .collect())
}
