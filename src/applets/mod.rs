//! Bundled example applets.
//!
//! Each submodule stands in for an independently built unit exposing one
//! [`Applet`](crate::applet::Applet). `example::interface` exposes only the
//! shared state shape so that `interop` can bind to it without depending on
//! the `example` implementation.

pub mod example;
pub mod interop;

use chrono::Local;
use std::fmt::Write;

const FALLBACK_TIMESTAMP_FORMAT: &str = "%-I:%M:%S %p";

/// Current local time in `format`, or a 12-hour `3:04:05 PM` clock when
/// `format` is not a valid strftime string.
pub(crate) fn timestamp(format: &str) -> String {
    let now = Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(FALLBACK_TIMESTAMP_FORMAT));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_falls_back_on_bad_format() {
        let stamp = timestamp("%Q");
        assert!(stamp.ends_with(" AM") || stamp.ends_with(" PM"), "{stamp}");
        assert_eq!(stamp.matches(':').count(), 2);
    }

    #[test]
    fn test_timestamp_uses_format() {
        assert_eq!(timestamp("literal"), "literal");
    }
}
