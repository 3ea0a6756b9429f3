//! Account storage, implemented outside this crate.

use async_trait::async_trait;
use thiserror::Error;

/// Account store failures. Callers on the recovery path do not tell these
/// apart.
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account does not exist")]
    UnknownAccount,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Persistent account storage.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Create a time-limited password reset record for the account with this
    /// email, returning the opaque record identifier.
    async fn generate_forgot_password_record(
        &self,
        email: &str,
    ) -> Result<String, AccountStoreError>;
}
