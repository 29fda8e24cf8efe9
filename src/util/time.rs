//! Wall-clock helpers.
//!
//! Timestamps are milliseconds since the Unix epoch as `f64`, taken from the
//! browser clock. SSR paths return `0.0` to keep server rendering
//! deterministic.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Format a playback position in seconds as `m:ss`.
///
/// Non-finite and negative inputs (e.g. a video with no metadata yet)
/// render as `0:00`.
pub fn format_clock(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
