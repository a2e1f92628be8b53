// Error types shared by every command.
//
// Components return these instead of terminating the process; `main` is
// the single place that prints them and picks the exit code.

use reqwest::StatusCode;
use thiserror::Error;

use crate::repo::UnsupportedRemote;

/// Handled failures of the CLI. Like any other error, each ends the
/// process with exit code 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// The token file does not exist yet.
    #[error("No token available. Please use the auth command.")]
    NoToken,

    /// `git config --get remote.origin.url` returned nothing.
    #[error("Current directory is not a valid Git repository")]
    NotARepository,

    /// The origin remote is not an SSH GitHub URL we can parse.
    #[error(transparent)]
    UnsupportedRemote(#[from] UnsupportedRemote),

    /// The authorizations endpoint did not answer with 201 Created.
    #[error("Unable to create token: {message}")]
    TokenCreation { message: String },

    /// The releases endpoint did not answer with 200 OK.
    #[error("Unable to list releases ({status})")]
    ListReleases { status: StatusCode },
}
