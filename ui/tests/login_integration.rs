#![cfg(not(target_arch = "wasm32"))]

use egui::accesskit::Role;
use kittest::Queryable;
use lodge_business::{LoginField, MockFetcher, Route};
use serde_json::json;

use crate::common::{TestCtx, fill, wait_for_login};

mod common;

fn click_login(harness: &mut egui_kittest::Harness<'_, lodge_ui::LodgeApp>) {
    harness.get_by_role_and_label(Role::Button, "Login").click();
    harness.step();
    harness.step();
}

/// Tests that the login page is displayed with all expected elements.
#[tokio::test]
async fn test_login_page_displayed() {
    let mut ctx = TestCtx::new_app_with_login(200, json!({ "valid": true })).await;

    let harness = ctx.harness_mut();
    harness.step();

    assert_eq!(
        harness.query_all_by_label("Login").count(),
        2,
        "Login heading and Login button should be displayed"
    );
    assert!(
        harness.query_all_by_label("Email").next().is_some(),
        "Email field should be displayed"
    );
    assert!(
        harness.query_all_by_label("Password").next().is_some(),
        "Password field should be displayed"
    );
    assert!(
        harness.query_by_label("Don't have an account?").is_some(),
        "Register link should be displayed"
    );
}

/// Tests that submitting an empty form reports both required errors.
#[tokio::test]
async fn test_empty_submit_is_blocked() {
    let mut ctx = TestCtx::new_app_with_login(200, json!({ "valid": true })).await;

    let harness = ctx.harness_mut();
    harness.step();
    click_login(harness);

    assert_eq!(
        harness.query_all_by_label("This field is required").count(),
        2,
        "Both fields should show the required error"
    );
    assert_eq!(harness.state().state().route(), Route::Login);
}

/// Tests that an edit clears the error of that field right away.
#[tokio::test]
async fn test_edit_clears_field_error() {
    let mut ctx = TestCtx::new_app_with_login(200, json!({ "valid": true })).await;

    let harness = ctx.harness_mut();
    harness.step();
    click_login(harness);

    fill(harness, LoginField::Email, "u");

    assert_eq!(
        harness.query_all_by_label("This field is required").count(),
        1,
        "Only the password error should remain"
    );
}

/// Tests that a malformed email blocks the login with a format error.
#[tokio::test]
async fn test_malformed_email_is_blocked() {
    let mut ctx = TestCtx::new_app_with_login(200, json!({ "valid": true })).await;

    let harness = ctx.harness_mut();
    harness.step();
    fill(harness, LoginField::Email, "abc");
    fill(harness, LoginField::Password, "secret");
    click_login(harness);

    assert!(
        harness.query_by_label("Email address is invalid").is_some(),
        "Format error should be displayed"
    );
    assert!(
        harness.query_by_label("This field is required").is_none(),
        "Password passed validation"
    );
}

/// Tests that a successful login moves to the home page.
#[tokio::test]
async fn test_successful_login_goes_home() {
    let mut ctx =
        TestCtx::new_app_with_login(200, json!({ "valid": true, "token": "t0k3n" })).await;

    let harness = ctx.harness_mut();
    harness.step();
    fill(harness, LoginField::Email, "user@example.com");
    fill(harness, LoginField::Password, "secret");
    click_login(harness);
    wait_for_login(harness).await;

    assert_eq!(harness.state().state().route(), Route::Home);
    assert!(
        harness
            .query_by_label_contains("Signed in as user@example.com")
            .is_some(),
        "Home page should show the signed in email"
    );
}

/// Tests that the server message is shown verbatim after a rejected login.
#[tokio::test]
async fn test_rejected_login_shows_error() {
    let mut ctx = TestCtx::new_app_with_login(
        401,
        json!({ "valid": false, "message": "Invalid credentials" }),
    )
    .await;

    let harness = ctx.harness_mut();
    harness.step();
    fill(harness, LoginField::Email, "user@example.com");
    fill(harness, LoginField::Password, "wrong");
    click_login(harness);
    wait_for_login(harness).await;

    assert_eq!(harness.state().state().route(), Route::Login);
    assert!(
        harness.query_by_label("Invalid credentials").is_some(),
        "Login error should be displayed verbatim"
    );
}

/// Tests that logging out from home returns to an empty login page.
#[test]
fn test_logout_returns_to_login() {
    let mut ctx = TestCtx::new_app_with_fetcher(MockFetcher::json(200, &json!({ "valid": true })));

    let harness = ctx.harness_mut();
    harness.step();
    fill(harness, LoginField::Email, "user@example.com");
    fill(harness, LoginField::Password, "secret");
    click_login(harness);
    harness.step();
    assert_eq!(harness.state().state().route(), Route::Home);

    harness.get_by_role_and_label(Role::Button, "Logout").click();
    harness.step();
    harness.step();

    assert_eq!(harness.state().state().route(), Route::Login);
    assert!(
        harness.query_by_label("This field is required").is_none(),
        "Login form should start fresh"
    );
}

/// Tests that the register link navigates and the back link returns.
#[test]
fn test_register_link_navigation() {
    let mut ctx = TestCtx::new_app_with_fetcher(MockFetcher::default());

    let harness = ctx.harness_mut();
    harness.step();

    harness.get_by_label("Don't have an account?").click();
    harness.step();
    harness.step();
    assert_eq!(harness.state().state().route(), Route::Register);
    assert!(harness.query_by_label("Register").is_some());

    harness.get_by_label("Back to login").click();
    harness.step();
    harness.step();
    assert_eq!(harness.state().state().route(), Route::Login);
}
