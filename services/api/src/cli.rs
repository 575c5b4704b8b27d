use crate::demo::{run_closet_report, run_demo, ClosetReportArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use wardrobe::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Wardrobe Service",
    about = "Demonstrate and run the wardrobe matching service from the command line",
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
    /// Generate a closet analytics report for stakeholder demos
    Closet {
        #[command(subcommand)]
        command: ClosetCommand,
    },
    /// Run an end-to-end CLI demo covering matching and analytics
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ClosetCommand {
    /// Summarize a sample closet's usage, distributions, and sustainability
    Report(ClosetReportArgs),
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
        Command::Closet {
            command: ClosetCommand::Report(args),
        } => run_closet_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
