//! lexreport Server - HTTP API for word frequency reports
//!
//! Configuration comes from `.env`, an optional `server.{toml,yaml,json}`
//! file and `LEXREPORT_SERVER__*` environment variables.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
