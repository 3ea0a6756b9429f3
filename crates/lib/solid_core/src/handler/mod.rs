// @zen-component: CORE-CapabilityHandler
//
//! Capability-gated handlers and the ordered chain that dispatches to them.
//!
//! A handler first declares whether it applies to an input (`can_handle`)
//! and is only then asked to do the work (`handle`). A rejection from
//! `can_handle` is a [`NotSupported`] value, never a [`HandlerError`], so a
//! chain can tell "try the next one" apart from "this one applied and failed".

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Convenience alias for handler return types.
pub type HandlerResult<T> = Result<T, HandlerError>;

/// A handler declined an input. Carries the reason for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct NotSupported {
    reason: String,
}

impl NotSupported {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Failure of an applicable handler, or of a chain with no applicable member.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("No handler supports the given input: [{}]", ReasonList(.0))]
    Unsupported(Vec<NotSupported>),

    #[error("Not supported: {0}")]
    NotSupported(#[from] NotSupported),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// The client-facing message, without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            HandlerError::BadRequest(m) | HandlerError::Internal(m) => m.clone(),
            HandlerError::NotSupported(n) => n.reason().to_string(),
            HandlerError::Unsupported(_) => self.to_string(),
        }
    }
}

struct ReasonList<'a>(&'a [NotSupported]);

impl fmt::Display for ReasonList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, reason) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(reason.reason())?;
        }
        Ok(())
    }
}

/// A unit of asynchronous work that can be probed for applicability.
///
/// `can_handle` must be free of side effects so callers can probe
/// several candidates before committing to one.
#[async_trait]
pub trait AsyncHandler<I: Send + Sync + 'static, O: Send + 'static = ()>: Send + Sync {
    /// Check whether this handler applies to `input`.
    async fn can_handle(&self, _input: &I) -> Result<(), NotSupported> {
        Ok(())
    }

    /// Do the work. Callers are expected to have checked `can_handle`.
    async fn handle(&self, input: I) -> HandlerResult<O>;

    /// `can_handle` followed by `handle`.
    async fn handle_safe(&self, input: I) -> HandlerResult<O> {
        self.can_handle(&input).await?;
        self.handle(input).await
    }
}

/// Ordered chain of handlers: the first member that accepts the input wins.
///
/// Once a member has accepted, its result is final. A failure of the selected
/// member is returned as is and the remaining members are not tried.
pub struct WaterfallHandler<I, O = ()>
where
    I: Send + Sync + 'static,
    O: Send + 'static,
{
    handlers: Vec<Arc<dyn AsyncHandler<I, O>>>,
}

impl<I, O> WaterfallHandler<I, O>
where
    I: Send + Sync + 'static,
    O: Send + 'static,
{
    /// Create a chain from an ordered list of handlers.
    pub fn new(handlers: Vec<Arc<dyn AsyncHandler<I, O>>>) -> Self {
        Self { handlers }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Find the first member accepting `input`, or every rejection in order.
    async fn find_handler(
        &self,
        input: &I,
    ) -> Result<&Arc<dyn AsyncHandler<I, O>>, Vec<NotSupported>> {
        let mut reasons = Vec::with_capacity(self.handlers.len());
        for (index, handler) in self.handlers.iter().enumerate() {
            match handler.can_handle(input).await {
                Ok(()) => {
                    debug!(index, "waterfall: handler selected");
                    return Ok(handler);
                }
                Err(reason) => reasons.push(reason),
            }
        }
        Err(reasons)
    }
}

#[async_trait]
impl<I, O> AsyncHandler<I, O> for WaterfallHandler<I, O>
where
    I: Send + Sync + 'static,
    O: Send + 'static,
{
    async fn can_handle(&self, input: &I) -> Result<(), NotSupported> {
        self.find_handler(input)
            .await
            .map(|_| ())
            .map_err(|reasons| NotSupported::new(HandlerError::Unsupported(reasons).to_string()))
    }

    async fn handle(&self, input: I) -> HandlerResult<O> {
        let handler = self
            .find_handler(&input)
            .await
            .map_err(HandlerError::Unsupported)?;
        handler.handle(input).await
    }
}
