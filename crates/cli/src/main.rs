use clap::{Parser, Subcommand};
use packtrace_domain::config::CliOverrides;
use packtrace_domain::Config;

mod bootstrap;
mod commands;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "packtrace")]
#[command(version)]
#[command(about = "Packet sniffer with a durable DNS transaction log")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Listen on a network interface and log DNS transactions
    Sniff {
        /// Device to listen on (ex. wlan0, eth0)
        #[arg(short, long)]
        device: Option<String>,

        /// BPF filter for the capture session
        #[arg(short, long)]
        bpf: Option<String>,

        /// Halt on the first unclassifiable packet or failed insert
        #[arg(long)]
        strict: bool,

        /// Stop after this many printed packets
        #[arg(short = 'n', long)]
        count: Option<u64>,
    },
    /// Report aggregate statistics over the DNS transaction log
    Stats {
        /// Most queried domains
        #[arg(short, long)]
        most_queried: bool,

        /// Query volume over time, minute buckets
        #[arg(short = 't', long)]
        over_time: bool,

        /// Unique (source, domain, role) triples
        #[arg(short, long)]
        unique: bool,

        /// Show the N most recent transactions
        #[arg(long, value_name = "N")]
        recent: Option<u32>,
    },
    /// List capture devices
    Devices,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (device, bpf, strict) = match &cli.command {
        Command::Sniff {
            device,
            bpf,
            strict,
            ..
        } => (device.clone(), bpf.clone(), *strict),
        _ => (None, None, false),
    };

    let overrides = CliOverrides {
        device,
        bpf,
        strict: strict.then_some(true),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = Config::load(cli.config.as_deref(), overrides)?;
    config.validate()?;

    bootstrap::init_logging(&config);

    match cli.command {
        Command::Sniff { count, .. } => {
            let pool = bootstrap::init_database(&config).await?;
            let stores = di::Stores::new(pool);
            let use_cases = di::UseCases::new(&stores, &config);
            commands::sniff::run(&config, &use_cases, count).await
        }
        Command::Stats {
            most_queried,
            over_time,
            unique,
            recent,
        } => {
            let pool = bootstrap::init_database(&config).await?;
            let stores = di::Stores::new(pool);
            let use_cases = di::UseCases::new(&stores, &config);
            commands::stats::run(&use_cases, most_queried, over_time, unique, recent).await
        }
        Command::Devices => commands::devices::run(),
    }
}
