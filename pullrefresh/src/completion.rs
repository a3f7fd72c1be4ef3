use alloc::sync::{Arc, Weak};
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
pub(crate) struct CompletionSignal {
    session: u64,
    fired: AtomicBool,
}

impl CompletionSignal {
    pub(crate) fn new(session: u64) -> Self {
        Self {
            session,
            fired: AtomicBool::new(false),
        }
    }

    pub(crate) fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}

/// The callback handed to the external refresh operation.
///
/// Call [`CompletionHandle::complete`] once the refresh finished, whether it succeeded or not:
/// until then the indicator stays at its rest position. The handle is `Send + Sync` and can be
/// cloned and completed from any thread. Only the first completion of a session has an effect;
/// later calls, and calls after the engine was dropped, do nothing.
#[derive(Clone)]
pub struct CompletionHandle {
    session: u64,
    signal: Weak<CompletionSignal>,
}

impl CompletionHandle {
    pub(crate) fn new(signal: &Arc<CompletionSignal>) -> Self {
        Self {
            session: signal.session,
            signal: Arc::downgrade(signal),
        }
    }

    /// Sequence number of the refresh session this handle belongs to (starting at 1).
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Whether completing now would still have an effect.
    pub fn is_pending(&self) -> bool {
        self.signal.upgrade().is_some_and(|s| !s.is_fired())
    }

    /// Signals that the refresh finished. Returns `true` only for the call that took effect.
    pub fn complete(&self) -> bool {
        let Some(signal) = self.signal.upgrade() else {
            pdebug!(session = self.session, "completion after the session ended; ignored");
            return false;
        };
        let first = !signal.fired.swap(true, Ordering::AcqRel);
        if !first {
            pdebug!(session = self.session, "duplicate completion ignored");
        }
        first
    }
}

impl fmt::Debug for CompletionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionHandle")
            .field("session", &self.session)
            .field("pending", &self.is_pending())
            .finish()
    }
}
