//! lexreport Server - HTTP API for word frequency reports
//!
//! Exposes the lexreport pipeline over HTTP:
//!
//! - **Reports**: fetch Bacon Ipsum paragraphs and return the PDF report
//! - **Charts**: the four-panel frequency chart alone, as SVG
//! - **Word metrics**: the top entries of the seeded metric store
//! - **Health & Metrics**: liveness/readiness probes and Prometheus metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `POST /api/generate-pdf` - Generate a report for `{"paragraphsQty": N}`
//! - `GET /api/charts?paragraphsQty=N` - Chart as SVG
//! - `GET /api/metrics` - Top 5 word metrics
//!
//! Errors are returned as `{"error": {"code": "...", "message": "..."}}`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
