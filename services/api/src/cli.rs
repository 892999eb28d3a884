use crate::demo::{run_demo, run_follow_up_plan, run_lead_scoring, DemoArgs, LeadFileArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use leasing_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Leasing Lead Intelligence",
    about = "Score leasing leads and plan follow-ups over HTTP or from the command line",
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
    /// Score leads or plan follow-ups from a JSON export
    Leads {
        #[command(subcommand)]
        command: LeadsCommand,
    },
    /// Run the bundled sample leads through scoring, follow-up, and conversion reporting
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum LeadsCommand {
    /// Score every lead in the file and print priority counts
    Score(LeadFileArgs),
    /// Print recommended contact windows for every lead in the file
    Followup(LeadFileArgs),
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
        Command::Leads {
            command: LeadsCommand::Score(args),
        } => run_lead_scoring(args),
        Command::Leads {
            command: LeadsCommand::Followup(args),
        } => run_follow_up_plan(args),
        Command::Demo(args) => run_demo(args),
    }
}
