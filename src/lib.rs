// Library root
// -----------
// This crate exposes a small library surface for the `github` CLI. The
// binary (`main.rs`) parses arguments and hands off to these modules.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the GitHub API (token
//   creation with the two-factor retry, release listing).
// - `cli`: clap definitions for the `auth` / `release` commands.
// - `config`: API base URL and token file location.
// - `error`: user-facing failure types shared by every command.
// - `logging`: tracing subscriber setup.
// - `repo`: infers owner/name from the local git remote.
// - `token`: stores and reads the personal access token on disk.
// - `ui`: terminal prompts, spinners and release rendering.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod repo;
pub mod token;
pub mod ui;
