const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Format a run duration as days, hours, minutes and seconds.
///
/// Zero components are left out: `8d 7h 6m 5.00s`, `8d 7h`, `8d 0.12s`.
/// A zero, negative or non-finite duration renders as an empty string.
pub fn human_readable_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return String::new();
    }
    let whole = seconds.trunc() as u64;
    let fraction = seconds.fract();

    let days = whole / SECONDS_PER_DAY;
    let hours = whole % SECONDS_PER_DAY / SECONDS_PER_HOUR;
    let minutes = whole % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    let secs = (whole % SECONDS_PER_MINUTE) as f64 + fraction;

    let mut parts = Vec::new();
    if days != 0 {
        parts.push(format!("{}d", days));
    }
    if hours != 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes != 0 {
        parts.push(format!("{}m", minutes));
    }
    if secs != 0.0 {
        parts.push(format!("{:.2}s", secs));
    }
    parts.join(" ")
}
