use clap::Parser;
use roslyn_bridge::errors::ErrorHandler;
use roslyn_bridge::structs::cli::Cli;
use roslyn_bridge::workers::command_runner::CommandRunner;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let command_name = cli.command.name();
    let mut runner = CommandRunner::new();
    if let Err(e) = runner.run_command(cli.command) {
        ErrorHandler::handle_error(&e);
        anyhow::bail!("roslyn-bridge {} failed", command_name);
    }

    Ok(())
}
