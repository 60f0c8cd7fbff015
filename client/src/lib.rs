//! Appsight Client Library
//!
//! Typed Rust client for a monitoring controller's REST telemetry API.
//! Enumerates an application topology (applications, tiers, nodes, business
//! transactions), fetches operational events in a time window, and fetches
//! metric series (average response time, calls per minute, errors per
//! minute) at application, tier, node and business-transaction scope, over
//! an absolute window or a relative duration, optionally rolled up
//! server-side into one aggregate point.
//!
//! # Modules
//!
//! - [`models`] - Typed records for topology, events and metrics
//! - [`query`] - Path and query-string construction, metric-path assembly
//! - [`response`] - Strict mapping of controller JSON into records
//! - [`resolve`] - Lookups and filters over fetched topology
//! - [`transport`] - Authenticated HTTP GET against the controller
//! - [`client`] - The facade combining the above, one method per query
//!
//! # Example
//!
//! ```no_run
//! use appsight::{ControllerClient, ControllerConfig, TimeWindow};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ControllerConfig::from_env()?;
//! let client = ControllerClient::new(&config)?;
//!
//! for tier in client.tiers_in("Ecommerce").await? {
//!     println!("{} ({} nodes)", tier.name, tier.number_of_nodes);
//! }
//!
//! let events = client
//!     .events("Ecommerce", TimeWindow::LastMinutes(60), "STALL", "WARN,ERROR")
//!     .await?;
//! println!("{} events in the last hour", events.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod config;
pub mod models;
pub mod query;
pub mod resolve;
pub mod response;
pub mod transport;

pub use client::{ClientError, ControllerClient};
pub use config::{ConfigError, ControllerConfig};
pub use query::{MetricKind, TimeWindow};
pub use response::DecodeError;
pub use transport::{HttpTransport, Transport, TransportError};

/// Re-export common dependencies for convenience.
pub use serde;
pub use serde_json;
