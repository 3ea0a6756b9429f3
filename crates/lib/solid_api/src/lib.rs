//! # solid_api
//!
//! HTTP wiring for the Solid identity and metadata core.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use solid_core::authentication::{Credentials, CredentialsExtractor, credentials_chain};
use solid_core::interaction::{
    AccountStore, EmailSender, ForgotPasswordHandler, ForgotPasswordHandlerArgs,
    ResetLinkContext, TemplateEngine,
};
use solid_core::metadata::MetadataExtractor;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::forgot_password;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Decides who each request claims to be.
    pub credentials_extractor: Arc<CredentialsExtractor>,
    /// Turns request headers into metadata.
    pub metadata_extractor: Arc<MetadataExtractor>,
    /// Forgot password interaction.
    pub forgot_password: Arc<ForgotPasswordHandler>,
}

impl AppState {
    /// Wire the default extractor chain and parsers around the given
    /// collaborators.
    pub fn new(
        config: ApiConfig,
        account_store: Arc<dyn AccountStore>,
        template_engine: Arc<dyn TemplateEngine<ResetLinkContext>>,
        email_sender: Arc<dyn EmailSender>,
    ) -> Self {
        let unsecure_agent = config.unsecure_web_id.clone().map(Credentials::from);
        let forgot_password = ForgotPasswordHandler::new(ForgotPasswordHandlerArgs {
            base_url: config.base_url.clone(),
            idp_path: config.idp_path.clone(),
            account_store,
            template_engine,
            email_sender,
        });
        Self {
            config,
            credentials_extractor: Arc::new(credentials_chain(unsecure_agent)),
            metadata_extractor: Arc::new(MetadataExtractor::default()),
            forgot_password: Arc::new(forgot_password),
        }
    }
}

/// Builds the Axum router with the identity provider routes and shared state.
pub fn router(state: AppState) -> Router {
    router_with(state, Router::new())
}

/// Like [`router`], with extra resource routes.
///
/// Resource routes run behind the request context middleware and can read
/// [`RequestCredentials`](middleware::request_context::RequestCredentials)
/// and [`RequestMetadata`](middleware::request_context::RequestMetadata).
/// Identity provider routes do not: a password reset must work whatever
/// authorization header the client sends.
pub fn router_with(state: AppState, resources: Router<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Identity provider routes (no request context)
    let idp = Router::new().route(
        &state.config.forgot_password_route(),
        post(forgot_password::forgot_password_handler),
    );

    // Resource routes (credentials and metadata extracted)
    let resources = resources.layer(axum::middleware::from_fn_with_state(
        state.clone(),
        middleware::request_context::extract_request_context,
    ));

    Router::new()
        .merge(idp)
        .merge(resources)
        .layer(cors)
        .with_state(state)
}
