use clap::Parser;
use ferrous_relay_domain::CliOverrides;
use ferrous_relay_infrastructure::dns::DnsServerHandler;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-relay")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Relay - Minimal UDP DNS responder and forwarder")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver (IPv4:port) to forward questions to
    #[arg(long, value_name = "IP:PORT")]
    resolver: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        resolver: cli.resolver.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Relay v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;
    info!(mode = %dns_services.mode, "Response mode selected");
    let dns_handler = DnsServerHandler::new(dns_services.handler_use_case);

    server::start_dns_server(config.server.listen_address(), dns_handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
