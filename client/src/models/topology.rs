//! Topology data models.
//!
//! Applications, tiers, nodes and business transactions as reported by the
//! controller's topology listings. Records are immutable value types created
//! fresh per call; the client holds no topology cache between calls.

use crate::models::de;
use serde::{Deserialize, Serialize};

/// A monitored application registered on the controller.
///
/// # Example
///
/// ```
/// use appsight::models::Application;
///
/// let json = r#"{"id": 5, "name": "Ecommerce", "description": "web shop"}"#;
/// let app: Application = serde_json::from_str(json).unwrap();
///
/// assert_eq!(app.id, "5");
/// assert_eq!(app.name, "Ecommerce");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Opaque application identifier.
    #[serde(deserialize_with = "de::opaque_id")]
    pub id: String,

    /// Application name, unique within a controller instance.
    pub name: String,

    /// Free-text description; the controller emits `null` when unset.
    #[serde(default)]
    pub description: Option<String>,
}

/// A logical grouping of nodes running the same application component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    /// Opaque tier identifier.
    #[serde(deserialize_with = "de::opaque_id")]
    pub id: String,

    /// Tier name.
    pub name: String,

    /// Free-text description; the controller emits `null` when unset.
    #[serde(default)]
    pub description: Option<String>,

    /// Type of agent reporting for this tier (e.g. "APP_AGENT").
    pub agent_type: String,

    /// Tier type as reported by the controller.
    #[serde(rename = "type")]
    pub tier_type: String,

    /// Number of nodes currently attached to this tier.
    pub number_of_nodes: i64,
}

/// A single monitored process or machine instance belonging to a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Opaque node identifier.
    #[serde(deserialize_with = "de::opaque_id")]
    pub id: String,

    /// Node name.
    pub name: String,

    /// Node type as reported by the controller.
    #[serde(rename = "type")]
    pub node_type: String,

    /// Identifier of the owning tier.
    #[serde(deserialize_with = "de::opaque_id")]
    pub tier_id: String,

    /// Name of the owning tier.
    pub tier_name: String,

    /// Identifier of the machine hosting this node.
    #[serde(deserialize_with = "de::opaque_id")]
    pub machine_id: String,

    /// Hostname of the machine.
    pub machine_name: String,

    /// Operating system of the machine. Wire name is `machineOSType`.
    #[serde(rename = "machineOSType")]
    pub machine_os_type: String,

    /// Whether an application agent reports for this node.
    pub app_agent_present: bool,

    /// Application agent version; `null` on the wire when no agent reports.
    #[serde(default)]
    pub app_agent_version: Option<String>,

    /// Whether a machine agent reports for this node.
    pub machine_agent_present: bool,

    /// Machine agent version; `null` on the wire when no agent reports.
    #[serde(default)]
    pub machine_agent_version: Option<String>,

    /// Agent-local identifier of the node; may be the empty string.
    #[serde(deserialize_with = "de::opaque_id")]
    pub node_unique_local_id: String,
}

/// A named, monitored logical operation attributed to a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessTransaction {
    /// Opaque business-transaction identifier.
    #[serde(deserialize_with = "de::opaque_id")]
    pub id: String,

    /// Display name of the business transaction.
    pub name: String,

    /// Internal name assigned by the agent that discovered it.
    pub internal_name: String,

    /// Whether this is a background transaction.
    pub background: bool,

    /// Entry point type (e.g. "SERVLET").
    pub entry_point_type: String,

    /// Identifier of the owning tier.
    #[serde(deserialize_with = "de::opaque_id")]
    pub tier_id: String,

    /// Name of the owning tier.
    pub tier_name: String,
}
