// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, build the API client and hand the
//   command to the matching UI flow.
// - Every failure is printed once here and turns into exit code 1.

use clap::error::ErrorKind;
use clap::Parser;
use github_releases_cli::{
    api::ApiClient,
    cli::{Cli, Commands, ReleaseCommand},
    config::Config,
    logging, ui,
};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    logging::init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env();
    debug!(api_url = %config.api_url, token_path = %config.token_path.display(), "configuration");

    match cli.command {
        Commands::Auth => {
            let api = ApiClient::new(&config.api_url)?;
            ui::run_auth(&api, &config)
        }
        Commands::List
        | Commands::Release {
            command: ReleaseCommand::List,
        } => {
            let api = ApiClient::new(&config.api_url)?;
            ui::run_release_list(&api, &config)
        }
        Commands::Release {
            command: ReleaseCommand::Create(args),
        } => {
            debug!(?args, "release create");
            ui::not_implemented("Create");
            Ok(())
        }
        Commands::Release {
            command: ReleaseCommand::Delete(args),
        } => {
            debug!(?args, "release delete");
            ui::not_implemented("Delete");
            Ok(())
        }
    }
}
