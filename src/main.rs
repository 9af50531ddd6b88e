use clap::Parser;
use send_fake::model::SleepReport;
use send_fake::{send, validate};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Send fake sleep data to the bot ingest endpoint for E2E testing
#[derive(Debug, Parser)]
#[command(name = "send-fake")]
struct Cli {
    /// Static authentication token
    #[arg(long)]
    token: String,

    /// Device identifier
    #[arg(long)]
    device_id: String,

    /// Date in YYYY-MM-DD format
    #[arg(long)]
    date: String,

    /// Sleep minutes (0-1440)
    #[arg(long)]
    minutes: i64,

    /// Bot host URL
    #[arg(long, env = "BOT_HOST", default_value = "http://localhost:8000")]
    host: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(send_fake::default_filter(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let date = match validate::parse_date(&cli.date) {
        Ok(date) => date,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let report = SleepReport {
        device_id: cli.device_id,
        date,
        sleep_minutes: cli.minutes,
    };

    let client = match send::build_client() {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = send::send_report(&client, &cli.host, &cli.token, &report).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
