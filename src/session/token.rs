use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation handle correlating a scheduler invocation with its session.
///
/// The flag is level-triggered and one-way: once set it stays set, so a
/// continuation that checks late still observes the cancellation. Clones
/// share the same flag, which is what lets every resumption of a session
/// observe a supersession that happened in between.
///
/// The same type doubles as the external abort signal accepted by
/// [`RenderRequest::abort`](crate::RenderRequest).
#[derive(Clone, Debug, Default)]
pub struct RenderToken {
    cancelled: Arc<AtomicBool>,
}

impl RenderToken {
    /// Create a fresh, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token that is already cancelled.
    pub(crate) fn already_cancelled() -> Self {
        let token = Self::new();
        token.cancel();
        token
    }

    /// Set the cancelled flag. Idempotent; cannot be undone.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Return `true` once [`cancel`](Self::cancel) has been called on any
    /// clone of this token.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/token.rs"]
mod tests;
