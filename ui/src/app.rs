use std::time::Duration;

use lodge_business::{AuthCompute, Route};

use crate::{pages, state::State};

pub struct LodgeApp {
    state: State,
}

impl LodgeApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for LodgeApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results sent by background requests
        if self.state.ctx.sync_computes() > 0 {
            ctx.request_repaint();
        }
        self.state.follow_auth_status();

        // Responses arrive outside of input events, keep polling while waiting
        if self
            .state
            .ctx
            .cached::<AuthCompute>()
            .is_some_and(AuthCompute::is_authenticating)
        {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let redirect = match self.state.route() {
                Route::Login => pages::login_screen(&mut self.state.ctx, ui),
                Route::Register => pages::register_page(ui),
                Route::Home => {
                    pages::home_page(&mut self.state.ctx, ui);
                    None
                }
            };

            if let Some(route) = redirect {
                self.state.navigate(route);
            }
        });
    }
}
