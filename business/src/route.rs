//! Route state for page navigation.

use lodge_states::State;

/// Represents the current page/route of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// Login page - shown when user is not authenticated
    #[default]
    Login,
    /// Registration page, reached from the login page link
    Register,
    /// Home page - shown when user is authenticated
    Home,
}

impl Route {
    pub fn href(self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::Register => "/auth/register",
            Self::Home => "/",
        }
    }

    pub fn from_href(href: &str) -> Option<Self> {
        [Self::Login, Self::Register, Self::Home]
            .into_iter()
            .find(|route| route.href() == href)
    }
}

impl State for Route {}

/// A static navigation link rendered under an auth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl RedirectLink {
    pub fn route(&self) -> Option<Route> {
        Route::from_href(self.href)
    }
}

pub const REGISTER_LINK: RedirectLink = RedirectLink {
    href: "/auth/register",
    label: "Don't have an account?",
};
