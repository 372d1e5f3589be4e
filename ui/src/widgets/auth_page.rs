//! Shared shell of the authentication pages.
//!
//! Renders the title, the submission error, the page body, the submit button
//! and the redirect link, centered on the screen.

use egui::{Align, Button, Layout, Response, RichText, Ui};
use lodge_business::{RedirectLink, Route};

use super::COLOR_RED;

#[derive(Debug, Clone, Copy)]
pub struct AuthPageProps<'a> {
    pub title: &'a str,
    pub submit_button_label: &'a str,
    /// Displayed verbatim above the form when present.
    pub submit_error: Option<&'a str>,
    pub redirect_link: RedirectLink,
    /// Disables the submit button while a submission is in flight.
    pub busy: bool,
}

#[derive(Debug)]
pub struct AuthPageResponse<R> {
    pub inner: R,
    pub response: Response,
    pub submitted: bool,
    /// Route requested through the redirect link.
    pub redirect: Option<Route>,
}

pub fn auth_page<R>(
    ui: &mut Ui,
    props: &AuthPageProps<'_>,
    body: impl FnOnce(&mut Ui) -> R,
) -> AuthPageResponse<R> {
    let mut submitted = false;
    let mut redirect = None;

    let inner_response = ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(20.0);
        ui.heading(props.title);
        ui.add_space(24.0);

        if let Some(error) = props.submit_error {
            ui.label(RichText::new(error).color(COLOR_RED));
            ui.add_space(8.0);
        }

        let inner = body(ui);

        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!props.busy, Button::new(props.submit_button_label))
                .clicked()
            {
                submitted = true;
            }
            if props.busy {
                ui.spinner();
            }
        });

        ui.add_space(12.0);

        if ui.link(props.redirect_link.label).clicked() {
            redirect = props.redirect_link.route();
        }

        inner
    });

    AuthPageResponse {
        inner: inner_response.inner,
        response: inner_response.response,
        submitted,
        redirect,
    }
}

#[cfg(test)]
mod auth_page_tests {
    use egui::accesskit::Role;
    use egui_kittest::Harness;
    use kittest::Queryable;
    use lodge_business::{REGISTER_LINK, Route};

    use super::{AuthPageProps, auth_page};

    #[derive(Debug, Default)]
    struct Outcome {
        submitted: bool,
        redirect: Option<Route>,
    }

    fn harness(submit_error: Option<&'static str>) -> Harness<'static, Outcome> {
        Harness::new_ui_state(
            move |ui, outcome: &mut Outcome| {
                let props = AuthPageProps {
                    title: "Login",
                    submit_button_label: "Login",
                    submit_error,
                    redirect_link: REGISTER_LINK,
                    busy: false,
                };
                let response = auth_page(ui, &props, |ui| {
                    ui.label("Body");
                });
                outcome.submitted |= response.submitted;
                if response.redirect.is_some() {
                    outcome.redirect = response.redirect;
                }
            },
            Outcome::default(),
        )
    }

    #[test]
    fn test_shell_elements_are_displayed() {
        let harness = harness(None);

        assert_eq!(
            harness.query_all_by_label("Login").count(),
            2,
            "title and submit button should both read Login"
        );
        assert!(harness.query_by_label("Body").is_some());
        assert!(harness.query_by_label(REGISTER_LINK.label).is_some());
    }

    #[test]
    fn test_submit_error_is_displayed_verbatim() {
        let harness = harness(Some("Invalid credentials"));

        assert!(
            harness.query_by_label("Invalid credentials").is_some(),
            "submit error should be shown exactly"
        );
    }

    #[test]
    fn test_submit_button_reports_submission() {
        let mut harness = harness(None);

        harness.get_by_role_and_label(Role::Button, "Login").click();
        harness.step();

        assert!(harness.state().submitted);
    }

    #[test]
    fn test_redirect_link_reports_route() {
        let mut harness = harness(None);

        harness.get_by_label(REGISTER_LINK.label).click();
        harness.step();

        assert_eq!(harness.state().redirect, Some(Route::Register));
    }
}
