use std::time::Duration;

use egui_kittest::Harness;
use lodge_business::{
    AuthCompute, BusinessConfig, FetchState, LoginField, LoginForm, MockFetcher,
};
use lodge_ui::LodgeApp;
use lodge_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    _mock_server: Option<MockServer>,
    harness: Harness<'a, LodgeApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, LodgeApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, LodgeApp> {
        &self.harness
    }

    /// App backed by a mock server answering `POST /api/auth/login`.
    pub async fn new_app_with_login(status_code: u16, body: serde_json::Value) -> Self {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(body))
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = LodgeApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: Some(mock_server),
            harness,
        }
    }

    /// App whose requests are answered synchronously by `fetcher`.
    #[allow(unused)]
    pub fn new_app_with_fetcher(fetcher: MockFetcher) -> Self {
        let state = State::new(
            BusinessConfig::new("http://mock".to_owned()),
            FetchState::new(fetcher),
        );
        let app = LodgeApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: None,
            harness,
        }
    }
}

/// Types `value` into `field` the way an edit event would.
#[allow(unused)]
pub fn fill(harness: &mut Harness<'_, LodgeApp>, field: LoginField, value: &str) {
    harness
        .state_mut()
        .state_mut()
        .ctx
        .state_mut::<LoginForm>()
        .expect("login form registered")
        .on_change(field, value);
    harness.step();
}

/// Steps the app until the login request is answered.
#[allow(unused)]
pub async fn wait_for_login(harness: &mut Harness<'_, LodgeApp>) {
    for _ in 0..200 {
        harness.step();
        let done = harness
            .state()
            .state()
            .ctx
            .cached::<AuthCompute>()
            .is_some_and(|auth| auth.is_authenticated() || auth.login_error().is_some());
        if done {
            // One more frame so the page reflects the outcome
            harness.step();
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("login did not finish in time");
}
