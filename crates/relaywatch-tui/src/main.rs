//! relaywatch entry point.

use clap::Parser;
use relaywatch_tui::{Runtime, TerminalDriver};
use tracing_subscriber::EnvFilter;

/// Relay chat monitor
#[derive(Parser, Debug)]
#[command(name = "relaywatch")]
#[command(about = "Terminal client for a streaming-chat relay")]
#[command(version)]
struct Args {
    /// Relay address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    relay: String,

    /// Log file path (stdout belongs to the TUI)
    #[arg(long, default_value = "relaywatch.log")]
    log_file: String,
}

fn init_logging(path: &str) -> Result<(), std::io::Error> {
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    let driver = TerminalDriver::new(&args.relay)?;
    let mut runtime = Runtime::new(driver, args.relay);
    Ok(runtime.run().await?)
}
