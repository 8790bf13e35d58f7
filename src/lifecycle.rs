//! Mount Guard
//!
//! A view that spawns a request may be gone by the time the response lands.
//! Views create a `MountGuard` and check it before writing the response into
//! their signals.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    /// Create a guard tied to the current reactive owner
    pub fn new() -> Self {
        let flag = Arc::new(AtomicBool::new(true));
        let on_unmount = Arc::clone(&flag);
        on_cleanup(move || on_unmount.store(false, Ordering::Relaxed));
        Self(flag)
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Log and report a response that arrived after unmount
    pub fn check(&self, what: &str) -> bool {
        let mounted = self.is_mounted();
        if !mounted {
            log::debug!("[VIEW] Dropping stale response: {}", what);
        }
        mounted
    }
}
