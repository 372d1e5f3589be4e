mod auth_page;
mod text_input;

pub use auth_page::{AuthPageProps, AuthPageResponse, auth_page};
pub use text_input::{TextInputProps, TextInputResponse, text_input};

use egui::Color32;

/// Red color for error text
pub(crate) const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
