/// Converts a duration token such as `180.042292ms`, `11.583µs` or `2.5s`
/// into milliseconds.
///
/// The match is anchored at the start of the trimmed input and anything
/// after the unit is ignored, so `1.5ms,` parses as `1.5`. Returns `None`
/// for any other unit or when the numeric part is not a float (`1.2.3ms`).
pub fn parse_duration_ms(text: &str) -> Option<f64> {
    let caps = regex!(r"^([0-9.]+)(ms|µs|s)").captures(text.trim())?;
    let value: f64 = caps[1].parse().ok()?;

    match &caps[2] {
        "ms" => Some(value),
        "µs" => Some(value / 1000.0),
        "s" => Some(value * 1000.0),
        _ => None,
    }
}

/// Finds the `elapsed = <duration>` field of a cleaned log line and returns
/// it in milliseconds.
pub fn elapsed_field_ms(line: &str) -> Option<f64> {
    let caps = regex!(r"elapsed\s*=\s*([0-9.]+(?:ms|µs|s))").captures(line)?;
    let token = &caps[1];
    let parsed = parse_duration_ms(token);
    if parsed.is_none() {
        tracing::debug!(token, "dropping unparsable elapsed value");
    }
    parsed
}
