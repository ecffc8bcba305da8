use clap::Parser;
use marginbell::adapter::inbound::cli::{self, output, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run(args) => cli::run::execute(args).await,
        Commands::Check(CheckCommand::Config(arg)) => cli::check::config::execute(&arg.config),
        Commands::Check(CheckCommand::Balance(arg)) => {
            cli::check::balance::execute(&arg.config).await
        }
        Commands::Check(CheckCommand::Telegram(arg)) => {
            cli::check::telegram::execute(&arg.config).await
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
