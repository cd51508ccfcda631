//! Turning raw readings into the 0..100 progress value the renderer takes

use crate::parse::hms_seconds_or_zero;

/// Map `value` from the range `[start, end]` to a percentage.
///
/// Missing or NaN bounds default to `0` and `100`. A missing or NaN value,
/// or one below `start`, counts as `start`; one above `end` counts as `end`.
/// An empty range yields 0.
pub fn range_progress(value: Option<f64>, start: Option<f64>, end: Option<f64>) -> f64 {
    let start = start.filter(|s| !s.is_nan()).unwrap_or(0.0);
    let end = end.filter(|e| !e.is_nan()).unwrap_or(100.0);

    let mut value = value.filter(|v| !v.is_nan()).unwrap_or(start);
    if value < start {
        value = start;
    }
    if value > end {
        value = end;
    }

    let progress = (value - start) / (end - start) * 100.0;
    if progress.is_finite() { progress } else { 0.0 }
}

/// State of a countdown timer at the moment of rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerSnapshot<'a> {
    /// Running. `seconds_until_finish` is `finishes_at - now`.
    Active {
        duration: Option<&'a str>,
        seconds_until_finish: Option<f64>,
    },
    /// Paused with `remaining` left on the clock.
    Paused {
        duration: Option<&'a str>,
        remaining: Option<&'a str>,
    },
    /// Idle, finished or any state without a running clock
    Idle,
}

impl<'a> TimerSnapshot<'a> {
    /// Build a snapshot from a timer's state name and attributes.
    pub fn from_state(
        state: &str,
        duration: Option<&'a str>,
        remaining: Option<&'a str>,
        seconds_until_finish: Option<f64>,
    ) -> Self {
        match state {
            "active" => TimerSnapshot::Active {
                duration,
                seconds_until_finish,
            },
            "paused" => TimerSnapshot::Paused { duration, remaining },
            _ => TimerSnapshot::Idle,
        }
    }
}

/// Elapsed share of a timer, clamped to `[0, 100]`.
///
/// Missing attributes and zero-length durations give 0.
pub fn timer_progress(snapshot: &TimerSnapshot<'_>) -> f64 {
    let (duration, remaining) = match *snapshot {
        TimerSnapshot::Active {
            duration: Some(duration),
            seconds_until_finish: Some(until_finish),
        } => (hms_seconds_or_zero(duration), until_finish),
        TimerSnapshot::Paused {
            duration: Some(duration),
            remaining: Some(remaining),
        } => (hms_seconds_or_zero(duration), hms_seconds_or_zero(remaining)),
        _ => return 0.0,
    };

    if duration == 0.0 || !remaining.is_finite() {
        return 0.0;
    }

    ((duration - remaining) / duration * 100.0).clamp(0.0, 100.0)
}
