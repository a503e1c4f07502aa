//! FoodCal
//!
//! An MCP server for food nutrition estimation.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use foodcal::build_info;
use foodcal::config::Config;
use foodcal::mcp::FoodCalService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays clean for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("foodcal=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    eprintln!(
        "Analysis delay: {} ms | Match mode: {}",
        config.analysis_delay_ms,
        config.match_mode.as_str()
    );
    eprintln!("Starting MCP server on stdio...");

    let service = FoodCalService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
