// UI layer: terminal prompts via `dialoguer`, spinners via `indicatif` and
// release rendering. The command flows (`run_auth`, `run_release_list`)
// glue prompts, the API client and the token store together.

use crate::api::{ApiClient, Credentials, Release};
use crate::config::Config;
use crate::{repo, token};
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::warn;

/// How many releases `release list` shows.
pub const RELEASE_LIMIT: usize = 5;

/// Styling applied to rendered lines. Keeps terminal escape codes out of
/// the listing logic.
pub trait LineStyle {
    fn highlight(&self, line: &str) -> String;
    fn plain(&self, line: &str) -> String {
        line.to_string()
    }
}

/// Green highlight using ANSI escape sequences.
pub struct AnsiStyle;

impl LineStyle for AnsiStyle {
    fn highlight(&self, line: &str) -> String {
        line.green().to_string()
    }
}

/// No styling at all.
pub struct PlainStyle;

impl LineStyle for PlainStyle {
    fn highlight(&self, line: &str) -> String {
        line.to_string()
    }
}

/// Pick the style for stdout, honouring `NO_COLOR`.
pub fn terminal_style() -> Box<dyn LineStyle> {
    if std::env::var_os("NO_COLOR").is_some() {
        Box::new(PlainStyle)
    } else {
        Box::new(AnsiStyle)
    }
}

/// `name (tag) -> archive`. A release without a name shows its tag.
pub fn format_release(release: &Release) -> String {
    let name = release.name.as_deref().unwrap_or(&release.tag_name);
    let url = release.tarball_url.as_deref().unwrap_or_default();
    format!("{} ({}) -> {}", name, release.tag_name, url)
}

/// Render the first [`RELEASE_LIMIT`] releases in the order given, the
/// newest one highlighted.
pub fn render_releases(releases: &[Release], style: &dyn LineStyle) -> Vec<String> {
    releases
        .iter()
        .take(RELEASE_LIMIT)
        .enumerate()
        .map(|(i, release)| {
            let line = format_release(release);
            if i == 0 {
                style.highlight(&line)
            } else {
                style.plain(&line)
            }
        })
        .collect()
}

fn spinner(msg: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(msg);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Ask for username (visible) and password (hidden).
pub fn ask_for_credentials() -> Result<Credentials> {
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let password: String = Password::new().with_prompt("Password").interact()?;
    Ok(Credentials { username, password })
}

/// Ask for the two-factor one-time code.
pub fn ask_for_otp() -> Result<String> {
    let code: String = Input::new()
        .with_prompt("Enter one-time password")
        .interact_text()?;
    Ok(code)
}

/// `auth`: prompt for credentials, exchange them for a token and store it.
pub fn run_auth(api: &ApiClient, config: &Config) -> Result<()> {
    println!("Please enter credentials to authenticate");
    let creds = ask_for_credentials()?;

    let pb = spinner("Requesting token...");
    // The OTP prompt needs a clean terminal line.
    let created = api.create_token(&creds, || {
        pb.finish_and_clear();
        ask_for_otp()
    });
    pb.finish_and_clear();

    token::store(&config.token_path, &created?)?;
    println!("New token stored");
    Ok(())
}

/// `release list`: print the newest releases of the current repository.
pub fn run_release_list(api: &ApiClient, config: &Config) -> Result<()> {
    let stored = token::retrieve(&config.token_path)?;
    let repo = repo::current_repo()?;

    let pb = spinner("Fetching releases...");
    let releases = api.list_releases(&stored, &repo);
    pb.finish_and_clear();

    for line in render_releases(&releases?, terminal_style().as_ref()) {
        println!("{line}");
    }
    Ok(())
}

/// `release create` / `release delete`: placeholders, nothing is sent.
pub fn not_implemented(action: &str) {
    warn!(action, "release {action} is not implemented");
    println!("{action} release: not implemented");
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    impl LineStyle for Marker {
        fn highlight(&self, line: &str) -> String {
            format!("* {line}")
        }
        fn plain(&self, line: &str) -> String {
            format!("  {line}")
        }
    }

    fn release(n: usize) -> Release {
        Release {
            name: Some(format!("Release {n}")),
            tag_name: format!("v{n}.0.0"),
            tarball_url: Some(format!("https://example.test/v{n}.tar.gz")),
        }
    }

    #[test]
    fn renders_first_five_in_received_order() {
        let releases: Vec<Release> = (1..=7).rev().map(release).collect();
        let lines = render_releases(&releases, &Marker);

        assert_eq!(
            lines,
            vec![
                "* Release 7 (v7.0.0) -> https://example.test/v7.tar.gz",
                "  Release 6 (v6.0.0) -> https://example.test/v6.tar.gz",
                "  Release 5 (v5.0.0) -> https://example.test/v5.tar.gz",
                "  Release 4 (v4.0.0) -> https://example.test/v4.tar.gz",
                "  Release 3 (v3.0.0) -> https://example.test/v3.tar.gz",
            ]
        );
    }

    #[test]
    fn fewer_than_limit_renders_all() {
        let releases = vec![release(1), release(2)];
        assert_eq!(render_releases(&releases, &PlainStyle).len(), 2);
        assert!(render_releases(&[], &PlainStyle).is_empty());
    }

    #[test]
    fn ansi_style_only_colours_the_first_line() {
        let releases: Vec<Release> = (1..=3).map(release).collect();
        let lines = render_releases(&releases, &AnsiStyle);

        assert!(lines[0].contains('\u{1b}'));
        assert!(lines[0].contains("Release 1 (v1.0.0)"));
        assert!(!lines[1].contains('\u{1b}'));
        assert!(!lines[2].contains('\u{1b}'));
    }

    #[test]
    fn missing_name_falls_back_to_tag() {
        let release = Release {
            name: None,
            tag_name: "v0.1.0".into(),
            tarball_url: None,
        };
        assert_eq!(format_release(&release), "v0.1.0 (v0.1.0) -> ");
    }
}
