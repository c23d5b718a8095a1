//! Debt CLI commands

use clap::Subcommand;

use super::position_set;
use crate::config::Settings;
use crate::display::{format_debt_list, format_outstanding};
use crate::error::RamResult;
use crate::session::Session;

/// Debt subcommands
#[derive(Subcommand)]
pub enum DebtCommands {
    /// Record that someone owes you money
    Add {
        /// Who owes you
        name: String,
        /// Amount owed (e.g. 50, 12.25, $7.50)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Show debts owed to you
    List {
        /// Include settled and negative entries, numbered by storage position
        #[arg(short, long)]
        all: bool,
    },
    /// Delete debts by the numbers shown in `debt list`
    Delete {
        /// Numbers from `debt list`
        #[arg(required = true)]
        positions: Vec<usize>,
        /// Numbers refer to `debt list --all`
        #[arg(short, long)]
        all: bool,
    },
    /// Show the sum of all debts
    Total,
}

/// Handle a debt command
pub fn handle_debt_command(session: &Session, settings: &Settings, cmd: DebtCommands) -> RamResult<()> {
    let service = session.debts();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        DebtCommands::Add { name, amount } => {
            let debt = service.add(&name, &amount)?;
            println!(
                "Added: {} owes you {}",
                debt.name,
                debt.amount.format_with_symbol(symbol)
            );
        }

        DebtCommands::List { all } => {
            if all {
                print!("{}", format_debt_list(&service.list()?, symbol));
            } else {
                print!(
                    "{}",
                    format_outstanding(&service.outstanding()?, service.total()?, symbol)
                );
            }
        }

        DebtCommands::Delete { positions, all } => {
            let positions = position_set(&positions);
            let removed = if all {
                service.delete(&positions)?
            } else {
                service.delete_outstanding(&positions)?
            };

            for debt in &removed {
                println!(
                    "Deleted: {} ({})",
                    debt.name,
                    debt.amount.format_with_symbol(symbol)
                );
            }
        }

        DebtCommands::Total => {
            println!("Total: {}", service.total()?.format_with_symbol(symbol));
        }
    }

    Ok(())
}
