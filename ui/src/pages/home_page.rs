use egui::{Align, Layout, Ui};
use lodge_business::{AuthCompute, LogoutCommand};
use lodge_states::StateCtx;
use log::error;

/// Shown once signed in.
pub fn home_page(ctx: &mut StateCtx, ui: &mut Ui) {
    let email = ctx
        .cached::<AuthCompute>()
        .and_then(AuthCompute::email)
        .unwrap_or_default()
        .to_owned();

    let logout = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(20.0);
            ui.heading("Welcome");
            ui.label(format!("Signed in as {email}"));
            ui.add_space(12.0);
            ui.button("Logout").clicked()
        })
        .inner;

    if logout && let Err(err) = ctx.dispatch::<LogoutCommand>() {
        error!("Failed to dispatch LogoutCommand: {err}");
    }
}
