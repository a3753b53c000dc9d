//! Cross-thread reload requests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A reload request that may be raised from any thread.
///
/// Background work never touches the navigation stacks. It raises the
/// signal instead and the UI thread turns it into a window reload on its
/// next frame, see [`SimpleWindowNavigator::poll_reload_signal`].
///
/// [`SimpleWindowNavigator::poll_reload_signal`]: super::SimpleWindowNavigator::poll_reload_signal
#[derive(Debug, Clone, Default)]
pub struct ReloadSignal {
    requested: Arc<AtomicBool>,
}

impl ReloadSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a reload on the next frame
    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    /// Whether a request is waiting to be consumed
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Consumes a pending request
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::SeqCst)
    }
}
