use crate::demo::{run_card_check, run_demo, run_quiz, CardArgs, DemoArgs, QuizArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use forever_style::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Forever Style",
    about = "Run the Forever Style storefront service or try its workflows from the command line",
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
    /// Play the style quiz with a fixed list of answers
    Quiz(QuizArgs),
    /// Check a card number and expiry the way the checkout form does
    Card(CardArgs),
    /// Walk through catalog, quiz, checkout and stylist flows end to end
    Demo(DemoArgs),
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
        Command::Quiz(args) => run_quiz(args),
        Command::Card(args) => run_card_check(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
