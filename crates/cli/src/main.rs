use clap::{Parser, Subcommand};
use visitor_counter_domain::CliOverrides;

mod bootstrap;
mod commands;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "visitor-counter")]
#[command(version)]
#[command(about = "Visitor Counter - records page loads and reports visitor counts per time window")]
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
    /// Serve content pages, the embed endpoint and the JSON API
    Serve {
        /// Web server port
        #[arg(short = 'w', long)]
        web_port: Option<u16>,

        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,
    },
    /// Create the visitors table and register the daily purge trigger
    Install,
    /// Deregister the purge trigger and drop the visitors table
    Uninstall,
    /// Run one retention sweep now
    Purge,
    /// Print the visitor count for a window
    Count {
        /// Window name (now, hour, day, week, month)
        #[arg(short = 's', long)]
        scope: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (web_port, bind_address) = match &cli.command {
        Command::Serve { web_port, bind } => (*web_port, bind.clone()),
        _ => (None, None),
    };
    let cli_overrides = CliOverrides {
        web_port,
        bind_address,
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let pool = bootstrap::init_database(&config.database).await?;
    let repos = di::Repositories::new(pool, &config.database).await?;
    let use_cases = di::UseCases::new(&repos, &config)?;

    match cli.command {
        Command::Serve { .. } => commands::serve(&config, &repos, &use_cases).await,
        Command::Install => commands::install(&use_cases).await,
        Command::Uninstall => commands::uninstall(&use_cases).await,
        Command::Purge => commands::purge(&use_cases).await,
        Command::Count { scope } => commands::count(&use_cases, scope.as_deref()).await,
    }
}
