use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use budget_tracker::config::Settings;
use budget_tracker::session::{FinanceManager, Prompter};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Terminal-based weekly budget and expense tracker",
    long_about = "Set a weekly budget, record your expenses one at a time, and get \
                  a warning as soon as spending passes the budget. The session ends \
                  with a summary of every expense you entered."
)]
struct Cli {
    /// Currency code shown before amounts [default: UGX]
    #[arg(long, env = "BUDGET_CURRENCY")]
    currency: Option<String>,

    /// Number of expenses to record [default: 5]
    #[arg(short = 'n', long, env = "BUDGET_TRANSACTIONS")]
    transactions: Option<usize>,

    /// Time-of-entry format, strftime style [default: %H:%M:%S]
    #[arg(long, env = "BUDGET_TIME_FORMAT")]
    time_format: Option<String>,

    /// Print the final summary as JSON on stdout (prompts go to stderr)
    #[arg(long)]
    json: bool,

    /// Log to stderr; repeat for more detail (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

impl Cli {
    /// Overlay the given flags on the default settings
    fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            currency_code: self.currency.clone().unwrap_or(defaults.currency_code),
            transaction_count: self.transactions.unwrap_or(defaults.transaction_count),
            time_format: self.time_format.clone().unwrap_or(defaults.time_format),
            json_summary: self.json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let settings = cli.settings();
    settings.validate()?;
    tracing::debug!(?settings, "settings loaded");

    let mut manager = FinanceManager::new();
    if settings.json_summary {
        // prompts on stderr so stdout holds only the JSON document
        let mut prompter = Prompter::new(io::stdin().lock(), io::stderr().lock());
        let summary = manager.run(&mut prompter, &settings)?;
        println!("{}", summary.to_json()?);
    } else {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
        manager.run(&mut prompter, &settings)?;
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over the -d flags when set
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
