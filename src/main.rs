use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

use walletbar::domain::{
    ChainSyncSnapshot, Coin, DisplayState, ExchangeRate, Impediment, WalletBarError,
};
use walletbar::messages::EnglishCatalog;
use walletbar::reconcile::{DisplayStateReconciler, InputUpdate, LockPrecedence};
use walletbar::sources::{Scenario, WalletSources};
use walletbar::state::{App, AppConfig, config::APP_NAME};
use walletbar::tui;
use walletbar::ui::ToolbarView;

/// walletbar - Wallet balance toolbar in the terminal
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the toolbar TUI driven by a scenario (default)
    Run {
        /// Scenario JSON file; the built-in demo plays when omitted
        #[arg(short, long)]
        scenario: Option<PathBuf>,
    },
    /// Compute one display state from the given inputs and print it
    Show(ShowArgs),
    /// Print the config file path and the effective configuration
    Config,
}

#[derive(Args)]
struct ShowArgs {
    /// Wallet balance in coins, e.g. 31.2
    #[arg(long)]
    balance: Option<Coin>,
    /// Exchange rate as CODE:VALUE, e.g. USD:112.35
    #[arg(long)]
    rate: Option<ExchangeRate>,
    /// Age of the best block in hours; omit for no chain snapshot
    #[arg(long, allow_negative_numbers = true)]
    behind_hours: Option<i64>,
    /// The chain is replaying
    #[arg(long)]
    replaying: bool,
    /// Report a network impediment
    #[arg(long)]
    stalled: bool,
    /// The wallet is lock-protected
    #[arg(long)]
    locked: bool,
    /// Do not request the local amount
    #[arg(long)]
    no_local: bool,
    /// Let a lock hide sync progress too
    #[arg(long)]
    lock_first: bool,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run { scenario: None }) {
        Commands::Run { scenario } => {
            init_logging(LogTarget::File)?;
            run(scenario).await
        }
        Commands::Show(args) => {
            init_logging(LogTarget::Stderr)?;
            show(&args)
        }
        Commands::Config => {
            init_logging(LogTarget::Stderr)?;
            print_config()
        }
    }
}

// ============================================================================
// Logging
// ============================================================================

enum LogTarget {
    /// Keeps the TUI's screen clean.
    File,
    Stderr,
}

fn init_logging(target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{APP_NAME}=info")));

    match target {
        LogTarget::File => {
            let mut path = dirs::data_local_dir()
                .ok_or_else(|| eyre!("Could not determine local data directory"))?;
            path.push(APP_NAME);
            fs::create_dir_all(&path)?;
            path.push(format!("{APP_NAME}.log"));
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

// ============================================================================
// Commands
// ============================================================================

async fn run(scenario: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load();
    let scenario = match scenario {
        Some(path) => Scenario::load(&path).map_err(WalletBarError::into_report)?,
        None => Scenario::demo(),
    };
    let scenario = match &config.currency_code {
        Some(code) => scenario.with_currency(code),
        None => scenario,
    };

    let sources = Arc::new(WalletSources::new());
    let player = scenario.play(Arc::clone(&sources));

    let mut terminal = tui::init()?;
    let mut app = App::new(config, sources);
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    player.abort();
    result
}

fn show(args: &ShowArgs) -> Result<()> {
    let mut config = AppConfig::load();
    if args.no_local {
        config.show_local_balance = false;
    }
    if args.lock_first {
        config.lock_precedence = LockPrecedence::LockFirst;
    }

    let now = Utc::now();
    let chain_sync = args
        .behind_hours
        .map(|hours| {
            let best_chain_date = Duration::try_hours(hours)
                .and_then(|behind| now.checked_sub_signed(behind))
                .ok_or_else(|| eyre!("--behind-hours out of range: {hours}"))?;
            let snapshot = ChainSyncSnapshot::new(Some(best_chain_date), args.replaying);
            Ok::<_, color_eyre::Report>(if args.stalled {
                snapshot.with_impediment(Impediment::Network)
            } else {
                snapshot
            })
        })
        .transpose()?;

    let mut reconciler = DisplayStateReconciler::new(config.policy());
    reconciler.apply(InputUpdate::Balance(args.balance));
    reconciler.apply(InputUpdate::ExchangeRate(args.rate.clone()));
    reconciler.apply(InputUpdate::ChainSync(chain_sync));
    let state = reconciler.apply(InputUpdate::LockChanged(args.locked));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!("{}", describe(&state, config.show_local_balance));
    if matches!(state, DisplayState::Balance { .. })
        && let Some(notice) = reconciler.notify_too_much_balance_if_applicable()
    {
        println!("{}", notice.message(&EnglishCatalog));
    }
    Ok(())
}

/// One line: the mode, then what the toolbar would show.
fn describe(state: &DisplayState, show_local_balance: bool) -> String {
    let view = ToolbarView::from_state(state, show_local_balance, &EnglishCatalog);
    let toolbar: String = view
        .to_line()
        .spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect();
    let shown = view.message_bar.unwrap_or_else(|| toolbar.trim().to_string());
    if shown.is_empty() {
        state.mode_name().to_string()
    } else {
        format!("{}: {shown}", state.mode_name())
    }
}

fn print_config() -> Result<()> {
    let path = AppConfig::config_path()?;
    let config = AppConfig::load();
    println!("{}", path.display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
