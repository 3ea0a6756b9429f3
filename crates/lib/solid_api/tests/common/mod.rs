//! Shared fixtures: in-memory collaborators for the recovery flow.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use solid_api::AppState;
use solid_api::config::ApiConfig;
use solid_core::interaction::{
    AccountStore, AccountStoreError, EmailArgs, EmailError, EmailSender, ResetLinkContext,
    TemplateEngine, TemplateError,
};
use tokio::sync::mpsc;

pub const KNOWN_EMAIL: &str = "alice@test.email";

/// Store knowing a single account.
pub struct SingleAccountStore {
    pub requests: Mutex<Vec<String>>,
}

#[async_trait]
impl AccountStore for SingleAccountStore {
    async fn generate_forgot_password_record(
        &self,
        email: &str,
    ) -> Result<String, AccountStoreError> {
        self.requests.lock().unwrap().push(email.to_string());
        if email == KNOWN_EMAIL {
            Ok("record-1".to_string())
        } else {
            Err(AccountStoreError::UnknownAccount)
        }
    }
}

/// Renders the reset link into a fixed anchor.
pub struct AnchorTemplate;

#[async_trait]
impl TemplateEngine<ResetLinkContext> for AnchorTemplate {
    async fn render(&self, context: &ResetLinkContext) -> Result<String, TemplateError> {
        Ok(format!("<a href=\"{}\">Reset Password</a>", context.reset_link))
    }
}

/// Forwards every email to a channel.
pub struct ChannelSender(pub mpsc::UnboundedSender<EmailArgs>);

#[async_trait]
impl EmailSender for ChannelSender {
    async fn send(&self, email: EmailArgs) -> Result<(), EmailError> {
        let _ = self.0.send(email);
        Ok(())
    }
}

pub fn test_config(unsecure_web_id: Option<&str>) -> ApiConfig {
    ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        base_url: "http://test.com/base/".into(),
        idp_path: "/idp".into(),
        unsecure_web_id: unsecure_web_id.map(str::to_string),
    }
}

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<SingleAccountStore>,
    pub emails: mpsc::UnboundedReceiver<EmailArgs>,
}

pub fn test_app(unsecure_web_id: Option<&str>) -> TestApp {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let store = Arc::new(SingleAccountStore {
        requests: Mutex::new(Vec::new()),
    });
    let (tx, rx) = mpsc::unbounded_channel();
    let state = AppState::new(
        test_config(unsecure_web_id),
        store.clone(),
        Arc::new(AnchorTemplate),
        Arc::new(ChannelSender(tx)),
    );
    TestApp {
        state,
        store,
        emails: rx,
    }
}
