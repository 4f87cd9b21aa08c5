//! Render notification
//!
//! State units call their owner's render callback after every mutation. A
//! frame loop usually passes [`DirtyFlag::callback`] and rebuilds only when
//! the flag was raised.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Callback invoked after a state unit mutates
pub type RenderCallback = Arc<dyn Fn() + Send + Sync>;

/// Shared "needs re-render" flag
#[derive(Clone, Debug, Default)]
pub struct DirtyFlag(Arc<AtomicBool>);

impl DirtyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_dirty(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Read and clear the flag.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }

    /// A render callback that raises this flag.
    pub fn callback(&self) -> RenderCallback {
        let flag = self.clone();
        Arc::new(move || flag.mark())
    }
}

/// Optional render callback held by a state unit
#[derive(Clone, Default)]
pub struct Notifier(Option<RenderCallback>);

impl Notifier {
    pub fn new(callback: RenderCallback) -> Self {
        Self(Some(callback))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn notify(&self) {
        if let Some(callback) = &self.0 {
            callback();
        }
    }
}

impl From<RenderCallback> for Notifier {
    fn from(callback: RenderCallback) -> Self {
        Self::new(callback)
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Notifier")
            .field(&self.0.as_ref().map(|_| "callback"))
            .finish()
    }
}
