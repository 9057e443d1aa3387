use clap::Parser;
use env_logger::Env;
use issueradar_cli::errors::ErrorHandler;
use issueradar_cli::structs::cli::Cli;
use issueradar_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(error) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        std::process::exit(1);
    }
}
