mod form;
mod teams;
mod history;
mod divider;
mod display;
mod web;

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use divider::TeamDivider;
use display::{format_team_pair, print_history};
use form::Position;
use history::{FileStorage, MemoryStorage};
use teams::RandomCoin;

#[derive(Parser)]
#[command(author, version, about = "Randomly split ten players into two teams, one pair per position", long_about = None)]
struct Cli {
    /// Directory holding the saved team history
    #[arg(long, env = "TEAM_DIVIDER_DATA_DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the team divider page
    Web {
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
        /// Keep history in memory only; nothing is written to the data directory
        #[arg(long)]
        ephemeral: bool,
    },
    /// Split ten players given in position order: TOP TOP JUNGLE JUNGLE MID MID ADC ADC SUPPORT SUPPORT
    Split {
        #[arg(num_args = 10, required = true, value_name = "NAME")]
        names: Vec<String>,
        /// Seed the coin flips for a reproducible split
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show saved splits, newest first
    History,
    /// Delete one saved split by id
    Delete { id: String },
    /// Delete all saved splits
    Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let storage = FileStorage::new(&cli.data_dir);

    match cli.command {
        Command::Web { port, ephemeral } => {
            println!("Access the site at http://localhost:{}", port);
            if ephemeral {
                web::start_server(port, MemoryStorage::new()).await?;
            } else {
                web::start_server(port, storage).await?;
            }
        }
        Command::Split { names, seed } => {
            let coin = match seed {
                Some(seed) => RandomCoin::seeded(seed),
                None => RandomCoin::from_entropy(),
            };
            let mut divider = TeamDivider::new(storage, coin);
            for (position, pair) in Position::ALL.iter().zip(names.chunks(2)) {
                for (slot, name) in pair.iter().enumerate() {
                    divider.set_player_name(*position, slot, name.as_str())?;
                }
            }

            let record = divider.submit_assignment()?;
            print!("{}", format_team_pair(&record.teams()));
            println!("Saved as record {} ({})", record.id, record.created_at);
        }
        Command::History => {
            let divider = TeamDivider::new(storage, RandomCoin::from_entropy());
            print_history(divider.records());
        }
        Command::Delete { id } => {
            let mut divider = TeamDivider::new(storage, RandomCoin::from_entropy());
            if divider.delete_record(&id)? {
                println!("Deleted record {}", id);
            } else {
                println!("No record with id {}", id);
            }
        }
        Command::Clear => {
            let mut divider = TeamDivider::new(storage, RandomCoin::from_entropy());
            divider.clear_history()?;
            println!("Team history cleared");
        }
    }

    Ok(())
}
