use std::io::Write;
use clap::Parser;
use env_logger::Env;
use log::Level;
use ailinter::errors::ErrorHandler;
use ailinter::structs::cli::Cli;
use ailinter::workers::command_runner::CommandRunner;

fn init_logger(verbose: bool) {
    let filter = if verbose { "info,ailinter=debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "[{level}] {}", record.args()),
        })
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut runner = CommandRunner::new(cli.config, cli.api_url);
    if let Err(error) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        std::process::exit(1);
    }
}
