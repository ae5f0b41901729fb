/// Render a count of seconds given as text, e.g. `"3725"` -> `"01:02:05"`.
///
/// Only the leading decimal integer is read (`"90s"` is 90 seconds) and it
/// saturates at `u64::MAX`. Empty, unparseable or negative input renders as
/// `"00:00"`.
pub fn video_duration(seconds: &str) -> String {
    match parse_leading_int(seconds) {
        Some((false, secs)) => format_duration(secs),
        _ => format_duration(0),
    }
}

/// `MM:SS`, or `HH:MM:SS` when there is at least one full hour.
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Sign and magnitude of the leading integer of `s`.
fn parse_leading_int(s: &str) -> Option<(bool, u64)> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });
    Some((negative, magnitude))
}
