//! Cooperative cancellation on SIGINT and SIGTERM
//!
//! An [`Interrupt`] is a shared flag checked by the ingestion loop once per
//! line. [`InterruptGuard`] ties the flag to the process signals for as long
//! as the guard lives: handlers only raise the flag, and the ingestion loop
//! turns a raised flag into [`Error::Interrupted`] so every scope in between
//! (the progress bar in particular) unwinds and cleans up normally.

use crate::error::{Error, Result};
use signal_hook_registry::SigId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag
#[derive(Clone, Debug, Default)]
pub struct Interrupt {
    raised: Arc<AtomicBool>,
}

impl Interrupt {
    /// Create a flag that is not raised
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// Check if cancellation was requested
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Fail with [`Error::Interrupted`] if cancellation was requested
    pub fn check(&self) -> Result<()> {
        if self.is_raised() {
            Err(Error::Interrupted)
        } else {
            Ok(())
        }
    }
}

/// Signal handlers raising an [`Interrupt`], removed on drop
pub struct InterruptGuard {
    interrupt: Interrupt,
    ids: Vec<SigId>,
}

impl InterruptGuard {
    /// Signals that request cancellation
    pub const SIGNALS: [libc::c_int; 2] = [libc::SIGINT, libc::SIGTERM];

    /// Route SIGINT and SIGTERM to a fresh [`Interrupt`]
    pub fn install() -> Result<Self> {
        let interrupt = Interrupt::new();
        let mut guard = Self {
            interrupt,
            ids: Vec::with_capacity(Self::SIGNALS.len()),
        };

        for signal in Self::SIGNALS {
            let raised = Arc::clone(&guard.interrupt.raised);
            // SAFETY: the action is a single atomic store, which is
            // async-signal-safe and touches no other state.
            let id = unsafe {
                signal_hook_registry::register(signal, move || {
                    raised.store(true, Ordering::SeqCst);
                })
            }
            .map_err(Error::Signal)?;
            guard.ids.push(id);
        }

        log::debug!("interrupt handlers installed");
        Ok(guard)
    }

    /// The flag raised by the handlers
    pub fn interrupt(&self) -> &Interrupt {
        &self.interrupt
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            signal_hook_registry::unregister(id);
        }
    }
}
