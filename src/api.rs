// API client module: a small blocking HTTP client for the two GitHub
// endpoints this tool uses, token creation and release listing.

use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::error::CliError;
use crate::repo::RepoRef;

/// Header carrying the two-factor challenge and the one-time code.
pub const OTP_HEADER: &str = "X-GitHub-OTP";

/// Username and password for a single token exchange. Never persisted.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body sent to the authorizations endpoint.
#[derive(Serialize, Debug)]
pub struct TokenRequest<'a> {
    pub scopes: &'a [&'a str],
    pub note: &'a str,
}

pub const TOKEN_REQUEST: TokenRequest<'static> = TokenRequest {
    scopes: &["repo"],
    note: "Github CLI",
};

#[derive(Deserialize, Debug)]
struct TokenResponse {
    token: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    message: String,
}

/// A release as returned by the releases endpoint. Only the fields the
/// listing shows are kept; `name` and `tarball_url` can be null upstream.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Release {
    #[serde(default)]
    pub name: Option<String>,
    pub tag_name: String,
    #[serde(default)]
    pub tarball_url: Option<String>,
}

/// Outcome of one POST to the authorizations endpoint.
#[derive(Debug, PartialEq, Eq)]
pub enum TokenExchange {
    /// 201 Created with the new token.
    Created(String),
    /// 401 with a two-factor challenge; a one-time code is needed.
    OtpRequired { message: String },
    /// Anything else.
    Rejected { message: String },
}

/// Blocking client bound to one API base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API at `base_url`
    /// (e.g. `https://api.github.com`).
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorizations_request(&self, creds: &Credentials) -> RequestBuilder {
        let url = format!("{}/authorizations", self.base_url);
        self.client
            .post(url)
            .basic_auth(&creds.username, Some(&creds.password))
            .json(&TOKEN_REQUEST)
    }

    /// POST the credentials once, optionally with a one-time code, and
    /// classify the response.
    pub fn request_token(&self, creds: &Credentials, otp: Option<&str>) -> Result<TokenExchange> {
        let mut req = self.authorizations_request(creds);
        if let Some(code) = otp {
            req = req.header(OTP_HEADER, code);
        }

        let res = req.send().context("Failed to send token request")?;
        let status = res.status();
        debug!(%status, with_otp = otp.is_some(), "token request answered");

        if status == StatusCode::CREATED {
            let body: TokenResponse = res.json().context("Parsing token response json")?;
            return Ok(TokenExchange::Created(body.token));
        }

        let otp_required = status == StatusCode::UNAUTHORIZED
            && res
                .headers()
                .get(OTP_HEADER)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.contains("required"));
        let message = error_message(res);

        Ok(if otp_required {
            TokenExchange::OtpRequired { message }
        } else {
            TokenExchange::Rejected { message }
        })
    }

    /// Exchange credentials for a token.
    ///
    /// If the server asks for a two-factor code, `ask_otp` is called once
    /// and the request is repeated with the code attached. Any response
    /// other than 201 after that is a [`CliError::TokenCreation`].
    pub fn create_token<F>(&self, creds: &Credentials, ask_otp: F) -> Result<String>
    where
        F: FnOnce() -> Result<String>,
    {
        let outcome = match self.request_token(creds, None)? {
            TokenExchange::OtpRequired { .. } => {
                info!("two-factor authentication required");
                let code = ask_otp()?;
                self.request_token(creds, Some(code.trim()))?
            }
            other => other,
        };

        match outcome {
            TokenExchange::Created(token) => Ok(token),
            TokenExchange::OtpRequired { message } | TokenExchange::Rejected { message } => {
                Err(CliError::TokenCreation { message }.into())
            }
        }
    }

    /// Fetch the releases of `repo`, in the order the API returns them
    /// (newest first).
    pub fn list_releases(&self, token: &str, repo: &RepoRef) -> Result<Vec<Release>> {
        let url = format!("{}/repos/{}/{}/releases", self.base_url, repo.owner, repo.name);
        let auth = HeaderValue::from_str(&format!("token {token}"))
            .context("Stored token is not a valid header value")?;

        let res = self
            .client
            .get(&url)
            .header(AUTHORIZATION, auth)
            .send()
            .context("Failed to send releases request")?;
        let status = res.status();
        debug!(%status, repo = %repo, "releases request answered");

        if status != StatusCode::OK {
            return Err(CliError::ListReleases { status }.into());
        }

        let releases: Vec<Release> = res.json().context("Parsing releases json")?;
        Ok(releases)
    }
}

/// Server-supplied `message` from an error body, or the status text.
fn error_message(res: Response) -> String {
    let status = res.status();
    match res.json::<ErrorResponse>() {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string()),
    }
}
