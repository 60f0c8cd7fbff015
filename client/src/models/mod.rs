//! Data models for the controller REST API.
//!
//! This module contains the typed records produced by topology, event and
//! metric queries. Wire field names match what the controller emits
//! byte-for-byte; see the `serde` renames where a name does not follow plain
//! camelCase.

pub mod event;
pub mod metric;
pub mod topology;

pub use event::{EntityRef, Event};
pub use metric::MetricDataPoint;
pub use topology::{Application, BusinessTransaction, Node, Tier};

pub(crate) mod de {
    //! Deserialization helpers shared across models.

    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(i64),
        Text(String),
    }

    /// Controller payloads carry entity identifiers as JSON numbers, while
    /// the public API treats them as opaque strings. Accept either form and
    /// stringify numerics.
    pub fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Id::deserialize(deserializer)? {
            Id::Number(n) => n.to_string(),
            Id::Text(s) => s,
        })
    }
}
