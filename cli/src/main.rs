//! Appsight CLI
//!
//! Command-line driver for the controller REST client. Every subcommand
//! maps to one client operation and prints the result as pretty JSON.
//!
//! # Usage
//!
//! ```bash
//! appsight --help
//! appsight applications
//! appsight tiers --app Ecommerce
//! appsight events Ecommerce --last-mins 60 --types STALL --severities WARN,ERROR
//! appsight metric Ecommerce --kind load --rollup --last-mins 15
//! ```

#![deny(unsafe_code)]

use anyhow::Result;
use appsight::{ControllerClient, ControllerConfig, MetricKind, TimeWindow};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

/// Appsight CLI - query a monitoring controller's REST telemetry API
#[derive(Parser)]
#[command(name = "appsight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Controller base URL
    #[arg(long, env = "APPSIGHT_CONTROLLER_URL")]
    controller_url: String,

    /// Username for basic authentication (e.g. user@customer1)
    #[arg(long, env = "APPSIGHT_USERNAME")]
    username: String,

    /// Password for basic authentication
    #[arg(long, env = "APPSIGHT_PASSWORD", hide_env_values = true)]
    password: String,

    /// Extra query parameters appended verbatim to every request
    #[arg(long, env = "APPSIGHT_EXTRA_PARAMS", default_value = "")]
    extra_params: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all applications
    Applications,

    /// List tiers, for one application or across all of them
    Tiers {
        /// Restrict to one application
        #[arg(long)]
        app: Option<String>,
    },

    /// List nodes, filtered by application or tier
    Nodes {
        /// Restrict to one application
        #[arg(long, conflicts_with = "tier")]
        app: Option<String>,

        /// Restrict to one tier (searched across all applications)
        #[arg(long)]
        tier: Option<String>,
    },

    /// List business transactions, filtered by application or tier
    BusinessTransactions {
        /// Restrict to one application
        #[arg(long, conflicts_with = "tier")]
        app: Option<String>,

        /// Restrict to one tier (searched across all applications)
        #[arg(long)]
        tier: Option<String>,
    },

    /// Fetch events for an application in a time window
    Events {
        /// Application name
        app: String,

        /// Comma-separated event types
        #[arg(long, default_value = "APPLICATION_ERROR,STALL")]
        types: String,

        /// Comma-separated severities
        #[arg(long, default_value = "WARN,ERROR")]
        severities: String,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Fetch a metric at application, tier, node or business-transaction scope
    Metric {
        /// Application name
        app: String,

        /// Metric family to fetch
        #[arg(long, value_enum, default_value_t = Kind::Art)]
        kind: Kind,

        /// Tier scope (also required for node scope)
        #[arg(long)]
        tier: Option<String>,

        /// Node scope; requires --tier
        #[arg(long, requires = "tier")]
        node: Option<String>,

        /// Business-transaction scope
        #[arg(long, conflicts_with_all = ["tier", "node"])]
        bt: Option<String>,

        /// Ask the server to roll the window up into one data point
        #[arg(long)]
        rollup: bool,

        #[command(flatten)]
        window: WindowArgs,
    },
}

/// Time-window selection: either a relative duration or an absolute range.
#[derive(Args)]
struct WindowArgs {
    /// Relative window: minutes before now
    #[arg(long, conflicts_with_all = ["start", "end"])]
    last_mins: Option<u32>,

    /// Absolute window start (RFC 3339, e.g. 2013-07-04T23:59:59Z)
    #[arg(long, requires = "end")]
    start: Option<DateTime<Utc>>,

    /// Absolute window end (RFC 3339)
    #[arg(long, requires = "start")]
    end: Option<DateTime<Utc>>,
}

impl WindowArgs {
    fn to_window(&self) -> Result<TimeWindow> {
        match (self.last_mins, self.start, self.end) {
            (Some(minutes), _, _) => Ok(TimeWindow::LastMinutes(minutes)),
            (None, Some(start), Some(end)) => Ok(TimeWindow::Between {
                start_ms: start.timestamp_millis(),
                end_ms: end.timestamp_millis(),
            }),
            _ => anyhow::bail!("specify either --last-mins or both --start and --end"),
        }
    }
}

/// Metric family, as exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// Average response time (ms)
    Art,
    /// Calls per minute
    Load,
    /// Errors per minute
    Errors,
}

impl From<Kind> for MetricKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Art => Self::AverageResponseTime,
            Kind::Load => Self::CallsPerMinute,
            Kind::Errors => Self::ErrorsPerMinute,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = ControllerConfig::new(&cli.controller_url, &cli.username, &cli.password)
        .with_extra_params(&cli.extra_params);
    let client = ControllerClient::new(&config)?;

    match cli.command {
        Commands::Applications => print_json(&client.applications().await?),
        Commands::Tiers { app } => match app {
            Some(app) => print_json(&client.tiers_in(&app).await?),
            None => print_json(&client.tiers().await?),
        },
        Commands::Nodes { app, tier } => match (app, tier) {
            (Some(app), _) => print_json(&client.nodes_in(&app).await?),
            (None, Some(tier)) => print_json(&client.nodes_in_tier(&tier).await?),
            (None, None) => print_json(&client.nodes().await?),
        },
        Commands::BusinessTransactions { app, tier } => match (app, tier) {
            (Some(app), _) => print_json(&client.business_transactions_in(&app).await?),
            (None, Some(tier)) => {
                print_json(&client.business_transactions_in_tier(&tier).await?)
            }
            (None, None) => print_json(&client.business_transactions().await?),
        },
        Commands::Events {
            app,
            types,
            severities,
            window,
        } => {
            let window = window.to_window()?;
            print_json(&client.events(&app, window, &types, &severities).await?)
        }
        Commands::Metric {
            app,
            kind,
            tier,
            node,
            bt,
            rollup,
            window,
        } => {
            let window = window.to_window()?;
            let kind = MetricKind::from(kind);
            let points = match (bt, tier, node) {
                (Some(bt), _, _) => {
                    client
                        .business_transaction_metric(&app, &bt, kind, window, rollup)
                        .await?
                }
                (None, Some(tier), Some(node)) => {
                    client
                        .node_metric(&app, &tier, &node, kind, window, rollup)
                        .await?
                }
                (None, Some(tier), None) => {
                    client.tier_metric(&app, &tier, kind, window, rollup).await?
                }
                (None, None, _) => {
                    client.application_metric(&app, kind, window, rollup).await?
                }
            };
            print_json(&points)
        }
    }
}
