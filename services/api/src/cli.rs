use crate::analyze::{run_analyze, run_prompts, AnalyzeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use essay_feedback::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "IELTS Essay Feedback",
    about = "Score IELTS Writing Task 2 essays over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Analyze an essay file and print the feedback as JSON
    Analyze(AnalyzeArgs),
    /// List the built-in practice prompts
    Prompts,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args).await,
        Command::Prompts => {
            run_prompts();
            Ok(())
        }
    }
}
