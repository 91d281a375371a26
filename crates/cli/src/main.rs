use clap::{Args, Parser, Subcommand};
use sensor_stats_domain::{CliOverrides, StatsQueryParams};
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "sensor-stats")]
#[command(version)]
#[command(about = "Sensor Stats - aggregate statistics over recorded sensor measurements")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Database path
    #[arg(long, global = true)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Min, max, average and count per measurement type
    Stats(StatsArgs),
    /// List the recorded measurement types
    Types,
    /// Show the most recent measurement
    Last {
        #[arg(long = "type")]
        measurement_type: Option<String>,
    },
}

#[derive(Args)]
struct StatsArgs {
    #[arg(long = "type")]
    measurement_type: Option<String>,

    /// Device name. Takes precedence over address and coordinates
    #[arg(long)]
    device: Option<String>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long, requires = "latitude", allow_hyphen_values = true)]
    longitude: Option<f64>,

    #[arg(long, requires = "longitude", allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// Trailing window such as 30m, 24h, 7d or 1w. Takes precedence over dates
    #[arg(long)]
    last: Option<String>,

    #[arg(long)]
    start_date: Option<String>,

    #[arg(long)]
    end_date: Option<String>,
}

impl From<StatsArgs> for StatsQueryParams {
    fn from(args: StatsArgs) -> Self {
        Self {
            measurement_type: args.measurement_type,
            device: args.device,
            address: args.address,
            longitude: args.longitude,
            latitude: args.latitude,
            last_time_period: args.last,
            start_date: args.start_date,
            end_date: args.end_date,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Sensor Stats v{}", env!("CARGO_PKG_VERSION"));

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, &config.database).await?;

    let repos = di::Repositories::new(pool.clone(), &config.database);
    let cache = di::build_stats_cache(&config.cache);
    let use_cases = di::UseCases::new(&repos, cache);

    let result = match cli.command {
        Command::Stats(args) => commands::stats(&use_cases, args.into()).await,
        Command::Types => commands::types(&use_cases).await,
        Command::Last { measurement_type } => {
            commands::last(&use_cases, measurement_type.as_deref()).await
        }
    };

    pool.close().await;
    result
}
