//! The login page.
//!
//! [`login_page`] only knows the form model, the error coming from outside and
//! a `login` callback. [`login_screen`] binds it to the store.

use egui::{Response, Ui};
use lodge_business::{
    AuthCompute, LoginCommand, LoginCredentials, LoginField, LoginForm, REGISTER_LINK, Route,
};
use lodge_states::StateCtx;
use log::{error, info};

use crate::widgets::{AuthPageProps, TextInputProps, auth_page, text_input};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoginPageProps<'a> {
    /// Error of the last login attempt, shown verbatim.
    pub login_error: Option<&'a str>,
    /// A login attempt is in flight.
    pub busy: bool,
}

#[derive(Debug)]
pub struct LoginPageResponse {
    pub response: Response,
    /// Route requested through the redirect link.
    pub redirect: Option<Route>,
}

/// Renders the login form and wires its events to `form`.
///
/// `login` is called once per submit that passes validation, with the exact
/// values of the form.
pub fn login_page(
    ui: &mut Ui,
    form: &mut LoginForm,
    props: LoginPageProps<'_>,
    login: impl FnOnce(&str, &str),
) -> LoginPageResponse {
    let page_props = AuthPageProps {
        title: "Login",
        submit_button_label: "Login",
        submit_error: props.login_error,
        redirect_link: REGISTER_LINK,
        busy: props.busy,
    };

    let page = auth_page(ui, &page_props, |ui| {
        let mut enter_pressed = false;
        for field in LoginField::ALL {
            enter_pressed |= field_input(ui, form, field);
            ui.add_space(8.0);
        }
        enter_pressed
    });

    if (page.submitted || (page.inner && !props.busy))
        && let Some(credentials) = form.on_submit()
    {
        info!("Login submitted for '{}'", credentials.email);
        login(&credentials.email, &credentials.password);
    }

    LoginPageResponse {
        response: page.response,
        redirect: page.redirect,
    }
}

/// Returns whether Enter was pressed in the input.
fn field_input(ui: &mut Ui, form: &mut LoginForm, field: LoginField) -> bool {
    let state = form.field(field);
    let props = TextInputProps {
        label: field.placeholder(),
        name: field.name(),
        placeholder: field.placeholder(),
        input_type: field.input_type(),
        error: state.error.as_deref(),
    };
    let input = text_input(ui, &props, &state.value);

    if let Some(value) = input.changed {
        form.on_change(field, value);
    }
    if let Some(value) = input.blurred
        && form.on_blur(field, &value)
    {
        ui.ctx().request_repaint();
    }

    input.submitted
}

/// Renders [`login_page`] against the store.
///
/// The error comes from [`AuthCompute`]. A successful submit stores the
/// [`LoginCredentials`] and dispatches [`LoginCommand`].
pub fn login_screen(ctx: &mut StateCtx, ui: &mut Ui) -> Option<Route> {
    let auth = ctx.cached::<AuthCompute>();
    let login_error = auth.and_then(AuthCompute::login_error).map(str::to_owned);
    let busy = auth.is_some_and(AuthCompute::is_authenticating);

    let mut submitted = None;
    let redirect = {
        let form = match ctx.state_mut::<LoginForm>() {
            Ok(form) => form,
            Err(err) => {
                error!("Login page cannot render: {err}");
                return None;
            }
        };
        let props = LoginPageProps {
            login_error: login_error.as_deref(),
            busy,
        };
        login_page(ui, form, props, |email, password| {
            submitted = Some(LoginCredentials {
                email: email.to_owned(),
                password: password.to_owned(),
            });
        })
        .redirect
    };

    if let Some(credentials) = submitted {
        match ctx.state_mut::<LoginCredentials>() {
            Ok(slot) => *slot = credentials,
            Err(err) => error!("Cannot store credentials: {err}"),
        }
        if let Err(err) = ctx.dispatch::<LoginCommand>() {
            error!("Failed to dispatch LoginCommand: {err}");
        }
    }

    redirect
}
