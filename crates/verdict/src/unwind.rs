// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Panic isolation without console noise.
//!
//! Panics caught here are reported through check outcomes and run
//! outcomes, so the process panic hook stays silent for them. Panics on
//! other threads, or outside [`catch`], still reach the previous hook.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

thread_local! {
    static QUIET: Cell<usize> = const { Cell::new(0) };
}

static HOOK: Once = Once::new();

/// Wrap the current hook once per process. The wrapper is never removed:
/// worker threads install and leave it concurrently.
fn install_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !is_quiet() {
                previous(info);
            }
        }));
    });
}

/// Decrements the quiet depth even when unwinding.
struct QuietGuard;

impl QuietGuard {
    fn enter() -> Self {
        QUIET.with(|q| q.set(q.get() + 1));
        QuietGuard
    }
}

impl Drop for QuietGuard {
    fn drop(&mut self) {
        QUIET.with(|q| q.set(q.get().saturating_sub(1)));
    }
}

/// Run `f`, catching a panic without printing it.
pub(crate) fn catch<R>(f: impl FnOnce() -> R) -> std::thread::Result<R> {
    install_hook();
    let _quiet = QuietGuard::enter();
    panic::catch_unwind(AssertUnwindSafe(f))
}

/// Whether panics on this thread are currently silenced.
pub(crate) fn is_quiet() -> bool {
    QUIET.with(Cell::get) > 0
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "an unknown error occurred".to_string()
    }
}

#[cfg(test)]
#[path = "unwind_tests.rs"]
mod tests;
