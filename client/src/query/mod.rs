//! Query construction for the controller REST API.
//!
//! Builds the `(path, query string)` pair for every logical request. Entity
//! names placed into a path or metric path are trimmed and have spaces
//! encoded as `%20`; no other characters are escaped. This is a narrow,
//! intentional subset of URL encoding: callers are responsible for avoiding
//! other reserved characters, and a query the controller cannot parse is
//! rejected server-side and surfaces as a transport failure.

pub mod metric_path;

pub use metric_path::MetricKind;

/// A fully composed request: endpoint path plus query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// Path relative to the controller base URL.
    pub path: String,
    /// URL query string, without the leading `?`.
    pub query: String,
}

impl RequestSpec {
    /// Appends a caller-supplied parameter string verbatim.
    ///
    /// The suffix is concatenated, not merged as structured key/value pairs:
    /// duplicate keys are resolved by the server's own precedence rules, not
    /// validated here.
    #[must_use]
    pub fn with_suffix(mut self, extra: &str) -> Self {
        if !extra.is_empty() {
            self.query.push('&');
            self.query.push_str(extra);
        }
        self
    }
}

/// The time window of an event or metric query.
///
/// The two variants select the controller's mutually exclusive time-range
/// modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// Absolute window between two instants, epoch milliseconds.
    Between {
        /// Inclusive start of the window.
        start_ms: i64,
        /// Inclusive end of the window.
        end_ms: i64,
    },
    /// Relative window covering the last `n` minutes before now.
    LastMinutes(u32),
}

impl TimeWindow {
    fn query_fragment(self) -> String {
        match self {
            Self::Between { start_ms, end_ms } => {
                format!("time-range-type=BETWEEN_TIMES&start-time={start_ms}&end-time={end_ms}")
            }
            Self::LastMinutes(minutes) => {
                format!("time-range-type=BEFORE_NOW&duration-in-mins={minutes}")
            }
        }
    }
}

/// Trims an entity name and encodes its spaces as `%20`.
///
/// Nothing else is escaped; the pipe in a metric path stays literal.
#[must_use]
pub fn encode_name(raw: &str) -> String {
    raw.trim().replace(' ', "%20")
}

fn app_scoped(app: &str, resource: &str) -> String {
    format!("/controller/rest/applications/{}/{resource}", encode_name(app))
}

/// Request for the list of all applications.
#[must_use]
pub fn applications() -> RequestSpec {
    RequestSpec {
        path: "/controller/rest/applications".to_string(),
        query: "output=JSON".to_string(),
    }
}

/// Request for the tiers of one application.
#[must_use]
pub fn tiers(app: &str) -> RequestSpec {
    RequestSpec {
        path: app_scoped(app, "tiers"),
        query: "output=JSON".to_string(),
    }
}

/// Request for the nodes of one application.
#[must_use]
pub fn nodes(app: &str) -> RequestSpec {
    RequestSpec {
        path: app_scoped(app, "nodes"),
        query: "output=JSON".to_string(),
    }
}

/// Request for the business transactions of one application.
#[must_use]
pub fn business_transactions(app: &str) -> RequestSpec {
    RequestSpec {
        path: app_scoped(app, "business-transactions"),
        query: "output=JSON".to_string(),
    }
}

/// Request for the events of one application in a time window.
///
/// `types` and `severities` are comma-separated lists passed through
/// unmodified; the caller validates them.
#[must_use]
pub fn events(app: &str, window: TimeWindow, types: &str, severities: &str) -> RequestSpec {
    RequestSpec {
        path: app_scoped(app, "events"),
        query: format!(
            "{}&event-types={types}&severities={severities}&output=JSON",
            window.query_fragment()
        ),
    }
}

/// Request for metric data of one application.
///
/// `metric_path` is the pipe-delimited series identifier (see
/// [`metric_path`]); it is trimmed and space-encoded here, exactly like a
/// name segment. With `rollup`, the server aggregates the window into a
/// single data point.
#[must_use]
pub fn metric_data(app: &str, metric_path: &str, window: TimeWindow, rollup: bool) -> RequestSpec {
    RequestSpec {
        path: app_scoped(app, "metric-data"),
        query: format!(
            "output=JSON&metric-path={}&{}&rollup={rollup}",
            encode_name(metric_path),
            window.query_fragment()
        ),
    }
}
