//! Client facade.
//!
//! One method per logical controller query. Each call is a single
//! independent request/response cycle; where a query needs topology the
//! controller cannot express directly (system-wide listings, metric paths
//! derived from a business transaction's owning tier), the extra lookups run
//! as explicit sequential cycles inside the same call. Results are fresh
//! containers every time; nothing is cached between calls.

use crate::config::ControllerConfig;
use crate::models::{Application, BusinessTransaction, Event, MetricDataPoint, Node, Tier};
use crate::query::{self, metric_path, MetricKind, RequestSpec, TimeWindow};
use crate::resolve;
use crate::response::{self, DecodeError};
use crate::transport::{HttpTransport, Transport, TransportError};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors a client operation can return.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport collaborator failed; propagated unchanged, no retry.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The controller's payload could not be mapped to the requested shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A metric query named a business transaction that no application
    /// lists, so no metric path can be built for it.
    #[error("business transaction '{0}' not found in any application")]
    BusinessTransactionNotFound(String),
}

/// Typed client for a monitoring controller's REST telemetry API.
///
/// # Example
///
/// ```no_run
/// use appsight::{ControllerClient, ControllerConfig, MetricKind, TimeWindow};
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ControllerConfig::new("http://localhost:8090", "user@customer1", "secret");
/// let client = ControllerClient::new(&config)?;
///
/// let load = client
///     .application_metric(
///         "Ecommerce",
///         MetricKind::CallsPerMinute,
///         TimeWindow::LastMinutes(60),
///         true,
///     )
///     .await?;
/// println!("{load:?}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ControllerClient<T = HttpTransport> {
    transport: T,
    extra_params: String,
}

impl ControllerClient<HttpTransport> {
    /// Creates a client backed by the HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the HTTP client cannot be built.
    pub fn new(config: &ControllerConfig) -> Result<Self, TransportError> {
        let transport =
            HttpTransport::new(&config.base_url, &config.username, &config.password)?;
        Ok(Self::with_transport(transport, &config.extra_params))
    }
}

impl<T: Transport> ControllerClient<T> {
    /// Creates a client over a custom transport.
    ///
    /// Primarily a seam for tests; production callers use
    /// [`ControllerClient::new`].
    pub fn with_transport(transport: T, extra_params: impl Into<String>) -> Self {
        Self {
            transport,
            extra_params: extra_params.into(),
        }
    }

    async fn fetch(&self, spec: RequestSpec) -> Result<String, ClientError> {
        let spec = spec.with_suffix(&self.extra_params);
        Ok(self.transport.get(&spec.path, &spec.query).await?)
    }

    async fn fetch_records<R>(
        &self,
        spec: RequestSpec,
        entity: &'static str,
    ) -> Result<Vec<R>, ClientError>
    where
        R: DeserializeOwned,
    {
        let body = self.fetch(spec).await?;
        Ok(response::decode_records(&body, entity)?)
    }

    async fn fetch_metric(
        &self,
        app: &str,
        path: &str,
        window: TimeWindow,
        rollup: bool,
    ) -> Result<Vec<MetricDataPoint>, ClientError> {
        let body = self.fetch(query::metric_data(app, path, window, rollup)).await?;
        Ok(response::decode_metric_points(&body)?)
    }

    // ------------------------------------------------------------------
    // Topology listings
    // ------------------------------------------------------------------

    /// Lists all applications on the controller.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn applications(&self) -> Result<Vec<Application>, ClientError> {
        self.fetch_records(query::applications(), "application").await
    }

    /// Lists the tiers of one application.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn tiers_in(&self, app: &str) -> Result<Vec<Tier>, ClientError> {
        self.fetch_records(query::tiers(app), "tier").await
    }

    /// Lists every tier across all applications.
    ///
    /// Defined as the per-application listings concatenated in application
    /// listing order; issues one request per application plus one for the
    /// application listing itself.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn tiers(&self) -> Result<Vec<Tier>, ClientError> {
        let mut all = Vec::new();
        for app in self.applications().await? {
            all.extend(self.tiers_in(&app.name).await?);
        }
        Ok(all)
    }

    /// Finds a tier by id via a full listing scan.
    ///
    /// `None` is a normal absent result, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn tier_by_id(&self, id: &str) -> Result<Option<Tier>, ClientError> {
        let tiers = self.tiers().await?;
        Ok(resolve::tier_by_id(&tiers, id).cloned())
    }

    /// Lists the nodes of one application.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn nodes_in(&self, app: &str) -> Result<Vec<Node>, ClientError> {
        self.fetch_records(query::nodes(app), "node").await
    }

    /// Lists every node across all applications.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn nodes(&self) -> Result<Vec<Node>, ClientError> {
        let mut all = Vec::new();
        for app in self.applications().await? {
            all.extend(self.nodes_in(&app.name).await?);
        }
        Ok(all)
    }

    /// Lists every node belonging to the named tier, across all
    /// applications.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn nodes_in_tier(&self, tier_name: &str) -> Result<Vec<Node>, ClientError> {
        Ok(resolve::nodes_in_tier(self.nodes().await?, tier_name))
    }

    /// Finds a node by id via a full listing scan.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn node_by_id(&self, id: &str) -> Result<Option<Node>, ClientError> {
        let nodes = self.nodes().await?;
        Ok(resolve::node_by_id(&nodes, id).cloned())
    }

    /// Finds a node by name via a full listing scan.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn node_by_name(&self, name: &str) -> Result<Option<Node>, ClientError> {
        let nodes = self.nodes().await?;
        Ok(resolve::node_by_name(&nodes, name).cloned())
    }

    /// Lists the business transactions of one application.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn business_transactions_in(
        &self,
        app: &str,
    ) -> Result<Vec<BusinessTransaction>, ClientError> {
        self.fetch_records(query::business_transactions(app), "business transaction")
            .await
    }

    /// Lists every business transaction across all applications.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn business_transactions(&self) -> Result<Vec<BusinessTransaction>, ClientError> {
        let mut all = Vec::new();
        for app in self.applications().await? {
            all.extend(self.business_transactions_in(&app.name).await?);
        }
        Ok(all)
    }

    /// Lists every business transaction belonging to the named tier, across
    /// all applications.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn business_transactions_in_tier(
        &self,
        tier_name: &str,
    ) -> Result<Vec<BusinessTransaction>, ClientError> {
        Ok(resolve::business_transactions_in_tier(
            self.business_transactions().await?,
            tier_name,
        ))
    }

    /// Finds a business transaction by id via a full listing scan.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn business_transaction_by_id(
        &self,
        id: &str,
    ) -> Result<Option<BusinessTransaction>, ClientError> {
        let bts = self.business_transactions().await?;
        Ok(resolve::business_transaction_by_id(&bts, id).cloned())
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Fetches the events of one application within a time window.
    ///
    /// `types` and `severities` are comma-separated lists passed through to
    /// the controller unmodified (e.g. `"APPLICATION_ERROR,STALL"`,
    /// `"WARN,ERROR"`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn events(
        &self,
        app: &str,
        window: TimeWindow,
        types: &str,
        severities: &str,
    ) -> Result<Vec<Event>, ClientError> {
        self.fetch_records(query::events(app, window, types, severities), "event")
            .await
    }

    // ------------------------------------------------------------------
    // Metrics
    // ------------------------------------------------------------------

    /// Fetches an application-scope metric.
    ///
    /// With `rollup`, the server aggregates the window into a single data
    /// point.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn application_metric(
        &self,
        app: &str,
        kind: MetricKind,
        window: TimeWindow,
        rollup: bool,
    ) -> Result<Vec<MetricDataPoint>, ClientError> {
        self.fetch_metric(app, &metric_path::application(kind), window, rollup)
            .await
    }

    /// Fetches a tier-scope metric.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn tier_metric(
        &self,
        app: &str,
        tier_name: &str,
        kind: MetricKind,
        window: TimeWindow,
        rollup: bool,
    ) -> Result<Vec<MetricDataPoint>, ClientError> {
        self.fetch_metric(app, &metric_path::tier(tier_name, kind), window, rollup)
            .await
    }

    /// Fetches a node-scope metric.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed payload.
    pub async fn node_metric(
        &self,
        app: &str,
        tier_name: &str,
        node_name: &str,
        kind: MetricKind,
        window: TimeWindow,
        rollup: bool,
    ) -> Result<Vec<MetricDataPoint>, ClientError> {
        self.fetch_metric(
            app,
            &metric_path::node(tier_name, node_name, kind),
            window,
            rollup,
        )
        .await
    }

    /// Fetches a business-transaction-scope metric.
    ///
    /// The metric path needs the owning tier's name, which the caller cannot
    /// supply to the controller directly; this method resolves it with
    /// exactly one fresh business-transactions fetch. Callers that already
    /// hold the listing should use
    /// [`business_transaction_metric_with`](Self::business_transaction_metric_with)
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BusinessTransactionNotFound`] when no listed
    /// business transaction matches `bt_name`, and otherwise an error on
    /// transport failure or a malformed payload.
    pub async fn business_transaction_metric(
        &self,
        app: &str,
        bt_name: &str,
        kind: MetricKind,
        window: TimeWindow,
        rollup: bool,
    ) -> Result<Vec<MetricDataPoint>, ClientError> {
        let bts = self.business_transactions().await?;
        self.business_transaction_metric_with(&bts, app, bt_name, kind, window, rollup)
            .await
    }

    /// Fetches a business-transaction-scope metric against caller-supplied
    /// topology.
    ///
    /// Issues exactly one request; the owning tier is resolved from `bts`
    /// without any network call.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BusinessTransactionNotFound`] when `bts` has
    /// no transaction named `bt_name`, and otherwise an error on transport
    /// failure or a malformed payload.
    pub async fn business_transaction_metric_with(
        &self,
        bts: &[BusinessTransaction],
        app: &str,
        bt_name: &str,
        kind: MetricKind,
        window: TimeWindow,
        rollup: bool,
    ) -> Result<Vec<MetricDataPoint>, ClientError> {
        let tier_name = resolve::owning_tier(bts, bt_name)
            .ok_or_else(|| ClientError::BusinessTransactionNotFound(bt_name.to_string()))?;
        self.fetch_metric(
            app,
            &metric_path::business_transaction(tier_name, bt_name, kind),
            window,
            rollup,
        )
        .await
    }
}
