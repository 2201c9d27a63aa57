//! Debug switch for folio
//!
//! # Environment Variables
//!
//! - `FOLIO_DEBUG=1` - Raise the log filter to `debug`

use std::sync::OnceLock;

/// Cached debug enabled state (checked once at startup)
static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if debug mode is enabled via `FOLIO_DEBUG`.
///
/// The result is cached after the first call.
#[inline]
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| debug_flag(std::env::var("FOLIO_DEBUG").ok().as_deref()))
}

fn debug_flag(value: Option<&str>) -> bool {
    value
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_values() {
        assert!(debug_flag(Some("1")));
        assert!(debug_flag(Some("TRUE")));
        assert!(!debug_flag(Some("0")));
        assert!(!debug_flag(None));
    }
}
