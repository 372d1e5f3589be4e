//! Business layer for the Lodge client: validation, the login form model,
//! authentication commands and navigation.

mod config;
mod fetch_service;
mod fetch_state;
mod login_form;
mod login_state;
mod route;
pub mod validation;

pub use config::{BusinessConfig, ConfigError};
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::MockFetcher;
pub use fetch_service::{EhttpFetcher, FetchService};
pub use fetch_state::FetchState;
pub use login_form::{FieldPhase, FieldState, InputType, LoginField, LoginForm};
pub use login_state::{
    AuthCompute, AuthStatus, LoginCommand, LoginCredentials, LoginRequest, LoginResponse,
    LogoutCommand,
};
pub use route::{REGISTER_LINK, RedirectLink, Route};

use lodge_states::StateCtx;

/// Registers every state, compute and command the login flow needs.
pub fn register_login_flow(ctx: &mut StateCtx, config: BusinessConfig, fetch: FetchState) {
    ctx.add_state(config);
    ctx.add_state(fetch);
    ctx.add_state(Route::default());
    ctx.add_state(LoginForm::default());
    ctx.add_state(LoginCredentials::default());
    ctx.record_compute(AuthCompute::default());
    ctx.record_command(LoginCommand);
    ctx.record_command(LogoutCommand);
}
