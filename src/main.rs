use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ram::cli::{handle_credential_command, handle_debt_command, handle_pin_command};
use ram::config::{RamPaths, Settings};
use ram::display::{format_credential_list, format_outstanding};
use ram::session::Session;

#[derive(Parser)]
#[command(
    name = "ram",
    author = "Kaylee Beyene",
    version,
    about = "Track debts owed to you and keep website passwords behind a PIN",
    long_about = "RAM keeps two lists: the debts people owe you, and website logins \
                  that are only shown once you authenticate. Both are stored as JSON \
                  in your config directory."
)]
struct Cli {
    /// PIN used for authentication instead of prompting
    #[arg(long, global = true, env = "RAM_PIN", hide_env_values = true)]
    pin: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Debt management commands
    #[command(subcommand)]
    Debt(ram::cli::DebtCommands),

    /// Password management commands
    #[command(subcommand, alias = "cred", alias = "password")]
    Credential(ram::cli::CredentialCommands),

    /// PIN enrollment commands
    #[command(subcommand)]
    Pin(ram::cli::PinCommands),

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ram=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = RamPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Debt(cmd)) => {
            let session = Session::open(&paths, &settings, cli.pin)?;
            handle_debt_command(&session, &settings, cmd)?;
        }
        Some(Commands::Credential(cmd)) => {
            let session = Session::open(&paths, &settings, cli.pin)?;
            handle_credential_command(&session, cmd).await?;
        }
        Some(Commands::Pin(cmd)) => {
            handle_pin_command(&paths, &mut settings, cli.pin, cmd).await?;
        }
        Some(Commands::Config) => {
            println!("RAM Configuration");
            println!("=================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!(
                "  PIN enrolled:    {}",
                if settings.has_pin() { "yes" } else { "no" }
            );
        }
        None => {
            // Same as opening the app: authenticate, then show both lists
            let session = Session::open(&paths, &settings, cli.pin)?;
            session.on_launch().await;

            let debts = session.debts();
            let symbol = settings.currency_symbol.as_str();
            print!(
                "{}",
                format_outstanding(&debts.outstanding()?, debts.total()?, symbol)
            );
            println!();

            let visible = session.credentials().visible()?;
            print!("{}", format_credential_list(visible.as_deref()));
        }
    }

    Ok(())
}
