use {
    clap::Parser,
    tracing::info,
    tracing_subscriber::EnvFilter,
};

use flowbridge_gateway::{config::BridgeConfig, server};

#[derive(Parser)]
#[command(name = "flowbridge", about = "Dialogflow CX to Microsoft Teams bridge")]
struct Cli {
    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3978)]
    port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(version = env!("CARGO_PKG_VERSION"), "flowbridge starting");

    let config = BridgeConfig::from_env()?;
    server::serve(&cli.bind, cli.port, config).await
}
