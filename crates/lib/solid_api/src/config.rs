//! API server configuration.

use tracing::warn;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3000").
    pub bind_addr: String,
    /// Public base URL; resource identifiers and reset links start with it.
    pub base_url: String,
    /// Path of the identity provider below `base_url`.
    pub idp_path: String,
    /// WebID every request is authenticated as. Development only.
    pub unsecure_web_id: Option<String>,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable          | Default                  |
    /// |-------------------|--------------------------|
    /// | `BIND_ADDR`       | `127.0.0.1:3000`         |
    /// | `BASE_URL`        | `http://localhost:3000/` |
    /// | `IDP_PATH`        | `/idp`                   |
    /// | `UNSECURE_WEB_ID` | unset                    |
    pub fn from_env() -> Self {
        let config = Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into()),
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/".into()),
            idp_path: std::env::var("IDP_PATH").unwrap_or_else(|_| "/idp".into()),
            unsecure_web_id: std::env::var("UNSECURE_WEB_ID")
                .ok()
                .filter(|id| !id.is_empty()),
        };
        if let Some(web_id) = &config.unsecure_web_id {
            warn!(web_id = %web_id, "every request will be authenticated as a fixed agent");
        }
        config
    }

    /// Route of the forgot password form, e.g. `/idp/forgotpassword`.
    pub fn forgot_password_route(&self) -> String {
        match self.idp_path.trim_matches('/') {
            "" => "/forgotpassword".to_string(),
            idp => format!("/{idp}/forgotpassword"),
        }
    }
}
