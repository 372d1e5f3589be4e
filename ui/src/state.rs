use lodge_business::{
    AuthCompute, BusinessConfig, FetchState, LoginForm, Route, register_login_flow,
};
use lodge_states::StateCtx;
use log::{info, warn};

/// The main application state.
#[derive(Debug)]
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|err| {
            warn!("{err}; falling back to the default API base URL");
            BusinessConfig::default()
        });

        Self::new(config, FetchState::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig, fetch: FetchState) -> Self {
        let mut ctx = StateCtx::new();
        register_login_flow(&mut ctx, config, fetch);
        Self { ctx }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url), FetchState::default())
    }

    pub fn route(&self) -> Route {
        self.ctx.state::<Route>().copied().unwrap_or_default()
    }

    /// Switches page. Leaving the login page discards its form.
    pub fn navigate(&mut self, route: Route) {
        let current = self.route();
        if current == route {
            return;
        }

        info!("Navigating from {} to {}", current.href(), route.href());
        if current == Route::Login
            && let Ok(form) = self.ctx.state_mut::<LoginForm>()
        {
            *form = LoginForm::default();
        }
        if let Ok(slot) = self.ctx.state_mut::<Route>() {
            *slot = route;
        }
    }

    /// Keeps the route in line with the authentication status.
    pub fn follow_auth_status(&mut self) {
        let authenticated = self
            .ctx
            .cached::<AuthCompute>()
            .is_some_and(AuthCompute::is_authenticated);

        match (authenticated, self.route()) {
            (true, Route::Login | Route::Register) => self.navigate(Route::Home),
            (false, Route::Home) => self.navigate(Route::Login),
            _ => {}
        }
    }
}
