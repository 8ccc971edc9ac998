//! Page-level side effects
//!
//! The one piece of state a drawer touches outside its own records: a
//! process-wide flag standing in for the page's scroll lock. An embedding
//! mirrors it to `body { overflow: hidden }`.
//!
//! The flag is a single shared boolean across every drawer that enables
//! scroll suppression. Two open drawers closing in sequence restore scrolling
//! while one of them is still open. Known limitation, kept as documented
//! behavior rather than replaced with reference counting.

use std::sync::atomic::{AtomicBool, Ordering};

static SCROLL_SUPPRESSED: AtomicBool = AtomicBool::new(false);

/// Suppress page scrolling
pub fn suppress_scroll() {
    SCROLL_SUPPRESSED.store(true, Ordering::Relaxed);
}

/// Restore page scrolling
pub fn restore_scroll() {
    SCROLL_SUPPRESSED.store(false, Ordering::Relaxed);
}

/// Whether scrolling is currently suppressed
pub fn scroll_suppressed() -> bool {
    SCROLL_SUPPRESSED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The flag is process-wide; this is the only test in the unit binary
    // that touches it.
    #[test]
    fn test_flag_round_trip() {
        suppress_scroll();
        assert!(scroll_suppressed());
        restore_scroll();
        assert!(!scroll_suppressed());
    }
}
