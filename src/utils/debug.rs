use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub(crate) fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Print a `[debug]` line on stderr when `--debug` is active
pub(crate) fn debug_log(message: impl Display) {
    if debug_enabled() {
        eprintln!("[debug] {message}");
    }
}
