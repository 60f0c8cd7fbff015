//! Operational event data models.
//!
//! Events are reported by the controller per application and time window.
//! An event references zero or more affected entities and optionally the
//! entity that triggered it.

use serde::{Deserialize, Serialize};

/// A reference to a monitored entity involved in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    /// Numeric identifier of the entity.
    pub entity_id: i64,

    /// Entity kind (e.g. "APPLICATION", "BUSINESS_TRANSACTION").
    pub entity_type: String,
}

/// An operational event emitted by the controller.
///
/// `affected_entities` may be empty and `triggered_entity` may be absent;
/// both are normal, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Numeric event identifier.
    pub id: i64,

    /// Event type (e.g. "STALL", "APPLICATION_ERROR").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event sub-type, controller-defined.
    pub sub_type: String,

    /// Severity (e.g. "INFO", "WARN", "ERROR").
    pub severity: String,

    /// Human-readable summary.
    pub summary: String,

    /// Deep link into the controller UI for this event.
    pub deep_link_url: String,

    /// When the event occurred, epoch milliseconds.
    pub event_time: i64,

    /// Whether the event has been archived.
    pub archived: bool,

    /// Whether the event has been marked as read.
    pub marked_as_read: bool,

    /// Whether the event has been marked as resolved.
    pub marked_as_resolved: bool,

    /// Entities affected by the event, in server order.
    pub affected_entities: Vec<EntityRef>,

    /// The entity that triggered the event; `null` or absent on the wire
    /// when there is none.
    #[serde(default)]
    pub triggered_entity: Option<EntityRef>,
}
