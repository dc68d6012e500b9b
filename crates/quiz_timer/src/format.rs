//! Remaining-time formatting

/// Format remaining milliseconds as `MM:SS`.
///
/// Non-positive input yields `"00:00"`. Minutes are floored while
/// seconds are ceiled: a countdown never shows `00:00` until it has
/// truly expired, so sub-second remainders display as `00:01`.
pub fn format_time(ms: f64) -> String {
    if ms <= 0.0 {
        return "00:00".to_string();
    }

    let minutes = (ms / 60_000.0).floor() as u64;
    let seconds = ((ms / 1000.0).ceil() as u64) % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
