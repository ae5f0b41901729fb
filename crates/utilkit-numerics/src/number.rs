/// Restrict `n` to `min..=max`.
///
/// Unlike [`Ord::clamp`] this never panics: with `min > max`, values below
/// `min` become `min` and everything else is checked against `max`.
pub fn clamp<T: PartialOrd>(n: T, min: T, max: T) -> T {
    if n < min {
        return min;
    }
    if n > max {
        return max;
    }
    n
}

/// One decimal place with exact ties rounded up, `1.25` -> `"1.3"`.
/// Callers pass non-negative values.
pub(crate) fn to_fixed_1(x: f64) -> String {
    format!("{:.1}", (x * 10.0).round() / 10.0)
}

const SUFFIXES: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "K")];

/// Abbreviate large numbers: `1500` -> `"1.5K"`, `2_000_000` -> `"2M"`.
pub fn shorten_large_number(num: f64) -> String {
    for (threshold, suffix) in SUFFIXES {
        if num >= threshold {
            let scaled = to_fixed_1(num / threshold);
            let scaled = scaled.strip_suffix(".0").unwrap_or(&scaled);
            return format!("{scaled}{suffix}");
        }
    }
    num.to_string()
}
