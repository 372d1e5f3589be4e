//! Local state of the login form.
//!
//! Each input owns a [`FieldState`]. Typing replaces the value and clears the
//! error without validating; blur validates one field; submit validates both
//! and yields the credentials only when every field passes.

use lodge_states::State;
use log::{debug, info};

use crate::{
    LoginCredentials,
    validation::{EMAIL_VALIDATORS, PASSWORD_VALIDATORS, Validator, compose_validators},
};

/// Where a field is in its edit/validate cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldPhase {
    /// Never edited or validated.
    #[default]
    Pristine,
    /// Edited since the last validation; no error is shown.
    Editing,
    ValidatedOk,
    ValidatedError,
}

/// Value and validation error of one input.
///
/// `error` is only `Some` after a validation pass ran against the current
/// `value`; any edit resets it to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
    phase: FieldPhase,
}

impl FieldState {
    pub fn phase(&self) -> FieldPhase {
        self.phase
    }

    fn edit(&mut self, value: String) {
        self.value = value;
        self.error = None;
        self.phase = FieldPhase::Editing;
    }

    fn set_validation(&mut self, error: Option<String>) {
        self.phase = if error.is_some() {
            FieldPhase::ValidatedError
        } else {
            FieldPhase::ValidatedOk
        };
        self.error = error;
    }
}

/// How an input renders its content.
///
/// Only masking differs between the variants. `Email` is plain text; its
/// format is enforced by the field's validators, not by the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Email,
    Password,
}

impl InputType {
    /// Whether typed characters are hidden.
    pub fn is_masked(self) -> bool {
        self == Self::Password
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub const ALL: [Self; 2] = [Self::Email, Self::Password];

    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    pub fn input_type(self) -> InputType {
        match self {
            Self::Email => InputType::Email,
            Self::Password => InputType::Password,
        }
    }

    pub fn validators(self) -> &'static [Validator] {
        match self {
            Self::Email => EMAIL_VALIDATORS,
            Self::Password => PASSWORD_VALIDATORS,
        }
    }

    pub fn validate(self, value: &str) -> Option<String> {
        compose_validators(self.validators(), value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: FieldState,
    pub password: FieldState,
}

impl LoginForm {
    pub fn field(&self, field: LoginField) -> &FieldState {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    fn field_mut(&mut self, field: LoginField) -> &mut FieldState {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Replaces the value and clears the error. Never validates.
    pub fn on_change(&mut self, field: LoginField, value: impl Into<String>) {
        self.field_mut(field).edit(value.into());
    }

    /// Validates `value` for `field`.
    ///
    /// The phase always settles on the result. Returns whether the displayed
    /// error changed, so an idempotent blur needs no repaint.
    pub fn on_blur(&mut self, field: LoginField, value: &str) -> bool {
        let error = field.validate(value);
        let state = self.field_mut(field);
        let changed = state.error != error;
        if changed {
            debug!("{} validation changed: {:?}", field.name(), error);
        }

        state.set_validation(error);
        changed
    }

    pub fn has_errors(&self) -> bool {
        LoginField::ALL
            .iter()
            .any(|field| self.field(*field).error.is_some())
    }

    /// Validates both fields and returns the credentials to log in with.
    ///
    /// Nothing happens while any field still shows an error. Otherwise both
    /// fields are validated again against their current values, even ones
    /// that were never blurred. If either fails, both errors are overwritten
    /// with the fresh results.
    pub fn on_submit(&mut self) -> Option<LoginCredentials> {
        if self.has_errors() {
            debug!("Submit ignored: form still shows errors");
            return None;
        }

        let email_error = LoginField::Email.validate(&self.email.value);
        let password_error = LoginField::Password.validate(&self.password.value);

        if email_error.is_some() || password_error.is_some() {
            info!("Submit blocked by validation");
            self.email.set_validation(email_error);
            self.password.set_validation(password_error);
            return None;
        }

        Some(LoginCredentials {
            email: self.email.value.clone(),
            password: self.password.value.clone(),
        })
    }
}

impl State for LoginForm {}
