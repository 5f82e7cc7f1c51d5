use clap::Parser;
use ferrous_mdns_application::services::ConfigHandle;
use ferrous_mdns_application::use_cases::ResolveBindingUseCase;
use ferrous_mdns_domain::CliOverrides;
use ferrous_mdns_infrastructure::system::SystemInterfaceProvider;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod plan;

#[derive(Parser)]
#[command(name = "ferrous-mdns")]
#[command(version)]
#[command(about = "Ferrous mDNS - multicast DNS host registration and binding resolution")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Responder name used in logs
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Interval between repeated queries, in milliseconds
    #[arg(long, value_name = "MS")]
    query_interval_ms: Option<u64>,

    /// Answer on loopback interfaces as well
    #[arg(long)]
    include_loopback: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        name: cli.name.clone(),
        query_interval_ms: cli.query_interval_ms,
        include_loopback: cli.include_loopback.then_some(true),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Ferrous mDNS v{}", env!("CARGO_PKG_VERSION"));
    info!(
        responder = %config.responder.name,
        hosts = config.hosts.len(),
        query_interval_ms = config.responder.query_interval_ms,
        "configuration loaded"
    );

    let provider = Arc::new(SystemInterfaceProvider::new());
    let handle = Arc::new(ConfigHandle::new(config));
    let resolver = ResolveBindingUseCase::new(Arc::clone(&handle), provider.clone());

    plan::log_answer_plan(&handle.load(), provider.as_ref(), &resolver)?;

    Ok(())
}
