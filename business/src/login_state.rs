//! Authentication status and the login/logout commands.
//!
//! The login page submits credentials by storing them in [`LoginCredentials`]
//! and dispatching [`LoginCommand`]. The command posts them to the backend
//! `/auth/login` endpoint and reports the outcome through [`AuthCompute`],
//! whose [`AuthCompute::login_error`] is what the page displays on failure.

use std::fmt;

use crate::{BusinessConfig, FetchState};
use lodge_states::{Command, Compute, Dep, State, StateError, Updater};
use log::{error, info};
use serde::{Deserialize, Serialize};

/// Request payload for the login endpoint.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Whether the credentials were accepted.
    pub valid: bool,
    /// Optional message with details.
    pub message: Option<String>,
    /// Session token for authenticated API calls (present on success).
    pub token: Option<String>,
}

/// Credentials submitted by the login page, read by [`LoginCommand`].
#[derive(Default, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl State for LoginCredentials {}

/// Result/status of authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Not authenticated yet.
    #[default]
    NotAuthenticated,
    /// Authentication in progress.
    Authenticating,
    /// Successfully authenticated.
    Authenticated {
        email: String,
        /// Session token (preserved for API calls).
        token: Option<String>,
    },
    /// Authentication failed with a message for the user.
    Failed(String),
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Authenticated { email, .. } => Some(email.as_str()),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => token.as_deref(),
            _ => None,
        }
    }
}

/// Compute-shaped cache for authentication status.
///
/// Only [`LoginCommand`] and [`LogoutCommand`] write it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthCompute {
    pub status: AuthStatus,
}

impl AuthCompute {
    /// The message of the last failed login, if that is the current status.
    pub fn login_error(&self) -> Option<&str> {
        match &self.status {
            AuthStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.is_authenticated()
    }

    pub fn is_authenticating(&self) -> bool {
        self.status == AuthStatus::Authenticating
    }

    pub fn email(&self) -> Option<&str> {
        self.status.email()
    }

    pub fn token(&self) -> Option<&str> {
        self.status.token()
    }
}

impl Compute for AuthCompute {}

/// Extracts an error message from a response, falling back to a default message.
fn extract_error_message(response_bytes: &[u8], default: &str) -> String {
    serde_json::from_slice::<LoginResponse>(response_bytes)
        .ok()
        .and_then(|r| r.message)
        .unwrap_or_else(|| default.to_owned())
}

/// Maps the outcome of the login request to the next status.
fn auth_status_from(result: ehttp::Result<ehttp::Response>, email: String) -> AuthStatus {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            let error_msg = format!("Network error: {err}");
            error!("LoginCommand: {error_msg}");
            return AuthStatus::Failed(error_msg);
        }
    };

    match response.status {
        200 => match serde_json::from_slice::<LoginResponse>(&response.bytes) {
            Ok(LoginResponse {
                valid: true, token, ..
            }) => {
                info!("LoginCommand: signed in as '{email}'");
                AuthStatus::Authenticated { email, token }
            }
            Ok(LoginResponse { message, .. }) => {
                let error_msg =
                    message.unwrap_or_else(|| "Invalid email or password".to_owned());
                info!("LoginCommand: login rejected: {error_msg}");
                AuthStatus::Failed(error_msg)
            }
            Err(e) => {
                error!("LoginCommand: Failed to parse LoginResponse: {e}");
                AuthStatus::Failed("Failed to parse server response".to_owned())
            }
        },
        400 => {
            let error_msg = extract_error_message(&response.bytes, "Invalid request format");
            info!("LoginCommand: Bad request: {error_msg}");
            AuthStatus::Failed(error_msg)
        }
        401 => {
            let error_msg = extract_error_message(&response.bytes, "Invalid email or password");
            info!("LoginCommand: Authentication failed: {error_msg}");
            AuthStatus::Failed(error_msg)
        }
        status => {
            let error_msg = format!("Server error (status {status})");
            error!("LoginCommand: {error_msg}");
            AuthStatus::Failed(error_msg)
        }
    }
}

/// Manual-only command that signs in with the stored [`LoginCredentials`].
///
/// ## Flow
///
/// 1. Sets status to `Authenticating`
/// 2. POSTs `{email, password}` to `/auth/login`
/// 3. On success (valid=true), sets status to `Authenticated`
/// 4. Otherwise sets status to `Failed` with a message for the user
///
/// The command returns as soon as the request is sent. Dispatch explicitly
/// via `ctx.dispatch::<LoginCommand>()`.
#[derive(Default, Debug)]
pub struct LoginCommand;

impl Command for LoginCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) -> Result<(), StateError> {
        let credentials = deps.get_state_ref::<LoginCredentials>()?;
        let config = deps.get_state_ref::<BusinessConfig>()?;
        let fetch = deps.get_state_ref::<FetchState>()?;

        if credentials.email.is_empty() || credentials.password.is_empty() {
            info!("LoginCommand: credentials are incomplete");
            updater.set(AuthCompute {
                status: AuthStatus::Failed("Email and password are required".to_owned()),
            });
            return Ok(());
        }

        info!("LoginCommand: signing in '{}'", credentials.email);

        updater.set(AuthCompute {
            status: AuthStatus::Authenticating,
        });

        let url = format!("{}/auth/login", config.api_url());
        let body = match serde_json::to_vec(&LoginRequest {
            email: &credentials.email,
            password: &credentials.password,
        }) {
            Ok(body) => body,
            Err(e) => {
                error!("LoginCommand: Failed to serialize LoginRequest: {e}");
                updater.set(AuthCompute {
                    status: AuthStatus::Failed(format!("Internal error: {e}")),
                });
                return Ok(());
            }
        };

        let mut request = ehttp::Request::post(url, body);
        request.headers.insert("Content-Type", "application/json");

        let email = credentials.email.clone();
        fetch.inner.fetch(
            request,
            Box::new(move |result| {
                updater.set(AuthCompute {
                    status: auth_status_from(result, email),
                });
            }),
        );

        Ok(())
    }
}

/// Manual-only command that clears the authentication state.
#[derive(Default, Debug)]
pub struct LogoutCommand;

impl Command for LogoutCommand {
    fn run(&self, _deps: Dep<'_>, updater: Updater) -> Result<(), StateError> {
        info!("LogoutCommand: user logged out");
        updater.set(AuthCompute {
            status: AuthStatus::NotAuthenticated,
        });
        Ok(())
    }
}
