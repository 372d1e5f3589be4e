//! Field validators for the auth forms.
//!
//! A validator maps the raw input to an optional error message; `None` means
//! the value is valid. Validators are chained with [`compose_validators`],
//! which stops at the first failure, so the order of a chain decides which
//! message the user sees.

use email_address::{EmailAddress, Options};

/// A pure check of a single input value.
pub type Validator = fn(&str) -> Option<String>;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Email address is invalid";

/// Chain used by the email field: emptiness is reported before format.
pub const EMAIL_VALIDATORS: &[Validator] = &[validate_is_required, validate_email];
pub const PASSWORD_VALIDATORS: &[Validator] = &[validate_is_required];

/// Fails on an empty value.
pub fn validate_is_required(value: &str) -> Option<String> {
    value.is_empty().then(|| REQUIRED_MESSAGE.to_owned())
}

/// Fails on a malformed address. An empty value passes; pair with
/// [`validate_is_required`] when the field is mandatory.
pub fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() || is_well_formed_email(value) {
        None
    } else {
        Some(INVALID_EMAIL_MESSAGE.to_owned())
    }
}

/// Runs `chain` in order and returns the first failure.
pub fn compose_validators(chain: &[Validator], value: &str) -> Option<String> {
    chain.iter().find_map(|validate| validate(value))
}

fn is_well_formed_email(value: &str) -> bool {
    // A bare address with a qualified domain: no `Name <addr>` display text,
    // no `[127.0.0.1]` literals, no dotless hosts such as `a@b`.
    let options = Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal();

    EmailAddress::parse_with_options(value, options).is_ok()
}
