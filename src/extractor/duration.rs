/// Convert a TRX `duration` attribute to milliseconds.
///
/// `HH:MM:SS[.fraction]` is read as a clock value, anything else as a plain
/// number of seconds. Malformed input yields 0; the result is always finite
/// and non-negative.
pub fn parse_duration_ms(raw: &str) -> f64 {
    let raw = raw.trim();
    let ms = if raw.contains(':') {
        clock_ms(raw)
    } else {
        raw.parse::<f64>().ok().map(|secs| secs * 1000.0)
    };

    match ms {
        Some(ms) if ms.is_finite() && ms >= 0.0 => ms,
        _ => 0.0,
    }
}

fn clock_ms(raw: &str) -> Option<f64> {
    let mut parts = raw.split(':');
    let hours = component(parts.next()?)?;
    let minutes = component(parts.next()?)?;
    let seconds = component(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((hours * 3600.0 + minutes * 60.0 + seconds) * 1000.0)
}

fn component(part: &str) -> Option<f64> {
    part.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("00:01:30.5000000", 90_500.0; "clock with fraction")]
    #[test_case("00:00:00.1234567", 123.4567; "sub second")]
    #[test_case("01:00:00", 3_600_000.0; "one hour")]
    #[test_case("2.5", 2_500.0; "plain seconds")]
    #[test_case(" 3 ", 3_000.0; "surrounding whitespace")]
    fn parses_valid_durations(raw: &str, expected: f64) {
        let ms = parse_duration_ms(raw);
        assert!((ms - expected).abs() < 1e-6, "{raw} -> {ms}");
    }

    #[test_case(""; "empty")]
    #[test_case("abc"; "not a number")]
    #[test_case("00:xx:10"; "bad minutes")]
    #[test_case("00:10"; "missing seconds")]
    #[test_case("00:00:01:00"; "too many components")]
    #[test_case("-5"; "negative")]
    #[test_case("NaN"; "nan")]
    #[test_case("inf"; "infinite")]
    #[test_case("1e400"; "overflow")]
    fn malformed_durations_degrade_to_zero(raw: &str) {
        assert_eq!(parse_duration_ms(raw), 0.0);
    }
}
