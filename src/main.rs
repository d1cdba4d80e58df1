use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_ledger::config::{paths::DIR_ENV_VAR, LedgerPaths, Settings};

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Track expenses, categories and budget goals on one terminal screen",
    long_about = "Pocket Ledger keeps expenses, spending categories and budget goals \
                  in memory for the length of a session. Launch it without a \
                  subcommand to open the screen."
)]
struct Cli {
    /// Directory holding config.json and the log file
    #[arg(long, global = true, env = DIR_ENV_VAR)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Write default settings to config.json
    Init {
        /// Overwrite an existing config.json
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };

    // Settings load per command: `init --force` must work over an invalid file
    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let settings = Settings::load_or_create(&paths)?;
            pocket_ledger::logging::init_logging(&paths, &settings)?;
            tracing::info!(dir = %paths.base_dir().display(), "starting pocket ledger");
            pocket_ledger::tui::run_tui(&settings)?;
        }
        Commands::Init { force } => {
            if paths.is_initialized() && !force {
                println!(
                    "Settings already exist at {} (use --force to overwrite)",
                    paths.settings_file().display()
                );
                return Ok(());
            }
            Settings::default().save(&paths)?;
            println!("Wrote default settings to {}", paths.settings_file().display());
        }
        Commands::Config => {
            let settings = Settings::load_or_create(&paths)?;
            println!("Pocket Ledger Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {:?}", settings.currency.symbol);
            println!("  Thousands delimiter: {:?}", settings.currency.thousands_delimiter);
            println!("  Decimal separator:   {:?}", settings.currency.decimal_separator);
            println!("  Log level:           {}", settings.log_level);
            println!("  Tick rate:           {}ms", settings.tick_rate_ms);
        }
    }

    Ok(())
}
