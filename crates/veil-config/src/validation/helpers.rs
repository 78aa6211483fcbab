//! Shared range helpers used by the validators and the persistence clamp.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Clamp a JSON number into `[min, max]`, rounding fractional values.
///
/// Returns `None` if `value` is not a number.
pub(crate) fn clamp_json_number(value: &serde_json::Value, min: i64, max: i64) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n.clamp(min, max));
    }
    if value.as_u64().is_some() {
        // Only reachable for values above i64::MAX.
        return Some(max);
    }
    let f = value.as_f64()?;
    if f.is_nan() {
        return Some(min);
    }
    Some((f.round() as i64).clamp(min, max))
}
