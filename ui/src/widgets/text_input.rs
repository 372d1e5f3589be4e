//! Labeled single-line input with an inline error slot.

use egui::{Key, Response, RichText, TextEdit, Ui};
use lodge_business::InputType;

use super::COLOR_RED;

#[derive(Debug, Clone, Copy)]
pub struct TextInputProps<'a> {
    pub label: &'a str,
    pub name: &'a str,
    pub placeholder: &'a str,
    pub input_type: InputType,
    pub error: Option<&'a str>,
}

/// What happened to the input during this frame.
#[derive(Debug)]
pub struct TextInputResponse {
    pub response: Response,
    /// New value, if the user edited the text.
    pub changed: Option<String>,
    /// Current value, if the input lost focus.
    pub blurred: Option<String>,
    /// Enter was pressed while the input had focus.
    pub submitted: bool,
}

/// Renders the input for `value`. The caller owns the value and applies the
/// reported edits.
pub fn text_input(ui: &mut Ui, props: &TextInputProps<'_>, value: &str) -> TextInputResponse {
    let mut buffer = value.to_owned();

    ui.label(props.label);
    let response = ui.add(
        TextEdit::singleline(&mut buffer)
            .id_salt(props.name)
            .hint_text(props.placeholder)
            .password(props.input_type.is_masked())
            .desired_width(240.0),
    );

    if let Some(error) = props.error {
        ui.label(RichText::new(error).color(COLOR_RED).small());
    }

    let lost_focus = response.lost_focus();
    let submitted = lost_focus && ui.input(|i| i.key_pressed(Key::Enter));

    TextInputResponse {
        changed: response.changed().then(|| buffer.clone()),
        blurred: lost_focus.then_some(buffer),
        submitted,
        response,
    }
}
