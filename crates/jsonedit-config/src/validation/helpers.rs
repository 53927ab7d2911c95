//! Shared validation helpers.

use crate::sanitize::validate_css_color;

/// Reset `value` to `default` if it is outside `[min, max]`.
pub(crate) fn check_range(
    problems: &mut Vec<String>,
    name: &str,
    value: &mut u32,
    default: u32,
    min: u32,
    max: u32,
) {
    if *value < min || *value > max {
        problems.push(format!("{name} = {value} is out of range [{min}, {max}]"));
        *value = default;
    }
}

/// Reset `value` to `default` if it is not a safe CSS color.
pub(crate) fn check_color(problems: &mut Vec<String>, name: &str, value: &mut String, default: &str) {
    if let Err(e) = validate_css_color(value) {
        problems.push(format!("{name}: {e}"));
        *value = default.to_string();
    }
}
