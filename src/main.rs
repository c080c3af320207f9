mod command;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use katsuyou::{Config, Dirs};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "katsuyou", version, about)]
struct Args {
    /// Configuration file to use. Defaults to `config.toml` in the
    /// configuration directory of the current user.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every form of a word.
    Forms(command::forms::FormsArgs),
    /// Check an answer for a single form of a word.
    Check(command::check::CheckArgs),
    /// Print the morphological class of a word.
    Classify(command::classify::ClassifyArgs),
    /// Fill in missing conjugations of a JSON word list.
    Enrich(command::enrich::EnrichArgs),
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::parse();

    let config = Config::resolve(args.config.as_deref(), Dirs::open)?;

    match &args.command {
        Command::Forms(forms_args) => command::forms::run(&config, forms_args),
        Command::Check(check_args) => command::check::run(&config, check_args),
        Command::Classify(classify_args) => command::classify::run(&config, classify_args),
        Command::Enrich(enrich_args) => command::enrich::run(&config, enrich_args),
    }
}
