//! Metric-path assembly.
//!
//! A metric path is a pipe-delimited string identifying a metric series in
//! the controller's metric namespace. Paths are assembled from fixed segment
//! names plus scope identifiers; space-encoding happens later, when the path
//! is placed into a query string.

/// The metric families this client can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Average response time in milliseconds.
    AverageResponseTime,
    /// Calls per minute (load).
    CallsPerMinute,
    /// Errors per minute.
    ErrorsPerMinute,
}

impl MetricKind {
    /// Leaf segment at application, tier and node scope.
    fn segment(self) -> &'static str {
        match self {
            Self::AverageResponseTime => "Average Response Time (ms)",
            Self::CallsPerMinute => "Calls per Minute",
            Self::ErrorsPerMinute => "Errors per Minute",
        }
    }

    /// Leaf segment at business-transaction scope.
    ///
    /// The controller reports ART under a different series name there; the
    /// other families are unchanged.
    fn business_transaction_segment(self) -> &'static str {
        match self {
            Self::AverageResponseTime => "Normal Average Response Time (ms)",
            other => other.segment(),
        }
    }
}

const OVERALL: &str = "Overall Application Performance";
const BT_ROOT: &str = "Business Transaction Performance|Business Transactions";

/// Path of an application-scope metric series.
#[must_use]
pub fn application(kind: MetricKind) -> String {
    format!("{OVERALL}|{}", kind.segment())
}

/// Path of a tier-scope metric series.
#[must_use]
pub fn tier(tier_name: &str, kind: MetricKind) -> String {
    format!("{OVERALL}|{tier_name}|{}", kind.segment())
}

/// Path of a node-scope metric series.
#[must_use]
pub fn node(tier_name: &str, node_name: &str, kind: MetricKind) -> String {
    format!(
        "{OVERALL}|{tier_name}|Individual Nodes|{node_name}|{}",
        kind.segment()
    )
}

/// Path of a business-transaction-scope metric series.
#[must_use]
pub fn business_transaction(tier_name: &str, bt_name: &str, kind: MetricKind) -> String {
    format!(
        "{BT_ROOT}|{tier_name}|{bt_name}|{}",
        kind.business_transaction_segment()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_paths_are_scope_independent() {
        // The application name never appears in the path; it lives in the
        // endpoint path instead.
        assert_eq!(
            application(MetricKind::AverageResponseTime),
            "Overall Application Performance|Average Response Time (ms)"
        );
        assert_eq!(
            application(MetricKind::CallsPerMinute),
            "Overall Application Performance|Calls per Minute"
        );
        assert_eq!(
            application(MetricKind::ErrorsPerMinute),
            "Overall Application Performance|Errors per Minute"
        );
    }

    #[test]
    fn test_tier_path_embeds_tier_name() {
        assert_eq!(
            tier("Inventory", MetricKind::ErrorsPerMinute),
            "Overall Application Performance|Inventory|Errors per Minute"
        );
    }

    #[test]
    fn test_node_path_embeds_tier_and_node() {
        assert_eq!(
            node("Inventory", "inventory-node-1", MetricKind::CallsPerMinute),
            "Overall Application Performance|Inventory|Individual Nodes\
             |inventory-node-1|Calls per Minute"
        );
    }

    #[test]
    fn test_business_transaction_art_uses_normal_series_name() {
        assert_eq!(
            business_transaction("Inventory", "/checkout", MetricKind::AverageResponseTime),
            "Business Transaction Performance|Business Transactions\
             |Inventory|/checkout|Normal Average Response Time (ms)"
        );
    }

    #[test]
    fn test_business_transaction_load_and_errors_keep_series_names() {
        assert_eq!(
            business_transaction("Inventory", "/checkout", MetricKind::CallsPerMinute),
            "Business Transaction Performance|Business Transactions\
             |Inventory|/checkout|Calls per Minute"
        );
        assert_eq!(
            business_transaction("Inventory", "/checkout", MetricKind::ErrorsPerMinute),
            "Business Transaction Performance|Business Transactions\
             |Inventory|/checkout|Errors per Minute"
        );
    }
}
