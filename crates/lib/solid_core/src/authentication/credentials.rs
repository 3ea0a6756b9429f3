//! Identity claim attached to a request.

use serde::{Deserialize, Serialize};

/// Who a request claims to be. All fields are optional; an empty value
/// stands for the public, unauthenticated agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl Credentials {
    /// Credentials carrying only a WebID.
    pub fn web_id(web_id: impl Into<String>) -> Self {
        Self {
            web_id: Some(web_id.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.web_id.is_none() && self.client_id.is_none() && self.issuer.is_none()
    }
}

impl From<&str> for Credentials {
    fn from(web_id: &str) -> Self {
        Self::web_id(web_id)
    }
}

impl From<String> for Credentials {
    fn from(web_id: String) -> Self {
        Self::web_id(web_id)
    }
}
