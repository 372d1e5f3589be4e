use egui::{Align, Layout, Ui};
use lodge_business::Route;

/// Placeholder destination of the register link.
pub fn register_page(ui: &mut Ui) -> Option<Route> {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(20.0);
        ui.heading("Register");
        ui.add_space(12.0);
        ui.label("Registration is not available yet.");
        ui.add_space(12.0);
        ui.link("Back to login")
            .clicked()
            .then_some(Route::Login)
    })
    .inner
}
