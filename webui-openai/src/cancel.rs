//! Cancellation handle for in-flight chat completions.

use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// Aborts an in-flight request.
///
/// Clones share the same flag: aborting any clone aborts the request, and
/// the flag never resets. Once aborted, pending sends and body reads on the
/// associated [`CompletionResponse`](crate::CompletionResponse) fail with
/// [`Error::Aborted`](crate::Error::Aborted).
#[derive(Debug, Clone, Default)]
pub struct AbortController {
    token: CancellationToken,
}

impl AbortController {
    /// Create a handle that has not been aborted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the associated request. Idempotent.
    pub fn abort(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("Aborting in-flight request");
        }
        self.token.cancel();
    }

    /// Whether [`abort`](Self::abort) has been called on any clone.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the handle is aborted.
    pub(crate) fn aborted(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}
