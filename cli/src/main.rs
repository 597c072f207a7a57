use clap::{Args, Parser, Subcommand};
use color_eyre::Result;
use leetpad::{grab, logger};
use leetpad_provider::Difficulty;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "leetpad",
    version,
    about = "Drop a random LeetCode question into the file you are editing"
)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Grab a random Easy question
    Easy(GrabArgs),
    /// Grab a random Medium question
    Medium(GrabArgs),
    /// Grab a random Hard question
    Hard(GrabArgs),
}

#[derive(Args)]
struct GrabArgs {
    /// File the question is appended to; stdout when omitted
    file: Option<PathBuf>,

    /// Language to use instead of inferring one from the file extension
    #[arg(short, long)]
    lang: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logger::init(cli.verbose);

    let (difficulty, args) = match cli.command {
        Command::Easy(args) => (Difficulty::Easy, args),
        Command::Medium(args) => (Difficulty::Medium, args),
        Command::Hard(args) => (Difficulty::Hard, args),
    };

    Ok(grab::run(difficulty, args.file, args.lang).await)
}
