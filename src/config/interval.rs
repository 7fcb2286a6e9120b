use std::time::Duration;

use super::environment::ConfigError;

/// Parse a Go-style duration string such as `30s`, `1m`, `1h30m` or `500ms`.
///
/// A bare number is rejected: every component needs a unit. Fractional
/// components (`1.5m`) are accepted.
pub fn parse_interval(value: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidInterval {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let input = value.trim();
    if input.is_empty() {
        return Err(invalid("empty duration"));
    }

    let mut total = Duration::ZERO;
    let mut rest = input;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(invalid("expected a number"));
        }
        let (number, tail) = rest.split_at(number_len);
        let amount: f64 = number.parse().map_err(|_| invalid("malformed number"))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);

        let unit_nanos: u64 = match unit {
            "ns" => 1,
            "us" | "µs" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60_000_000_000,
            "h" => 3_600_000_000_000,
            "" => return Err(invalid("missing unit")),
            _ => return Err(invalid("unknown unit")),
        };

        let component = match number.parse::<u64>() {
            Ok(whole) => whole.checked_mul(unit_nanos).map(Duration::from_nanos),
            Err(_) => Duration::try_from_secs_f64(amount * unit_nanos as f64 / 1e9).ok(),
        }
        .ok_or_else(|| invalid("duration out of range"))?;
        total = total
            .checked_add(component)
            .ok_or_else(|| invalid("duration out of range"))?;
        rest = tail;
    }

    if total.is_zero() {
        return Err(invalid("interval must be greater than zero"));
    }

    Ok(total)
}

/// Render a duration compactly for logs and the startup message (`1m`, `1h30m`, `45s`).
pub fn format_interval(duration: Duration) -> String {
    let total_ms = duration.as_millis();
    if total_ms == 0 {
        return "0s".to_string();
    }
    if total_ms % 1000 != 0 {
        return format!("{}ms", total_ms);
    }

    let secs = duration.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    if seconds > 0 {
        out.push_str(&format!("{}s", seconds));
    }
    out
}
