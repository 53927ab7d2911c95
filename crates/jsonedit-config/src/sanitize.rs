//! CSS value sanitization for highlight styles.
//!
//! Highlight colors end up inside inline `style` attributes of trusted
//! overlay markup, so only safe value formats pass:
//! - Hex colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)` with numeric arguments
//!
//! Rejects anything containing: `expression(`, `url(`, `javascript:`,
//! `import`, `;`, `{`, `}`, `<`, `>`, `"`.

/// Validate a CSS color value.
///
/// Named colors are rejected along with everything else that is not hex
/// or `rgb()`/`rgba()`.
pub fn validate_css_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty CSS color value".to_string());
    }

    check_injection_patterns(trimmed)?;

    if trimmed.starts_with('#') {
        return validate_hex_color(trimmed);
    }

    if trimmed.starts_with("rgba(") || trimmed.starts_with("rgb(") {
        return validate_rgb_function(trimmed);
    }

    Err(format!(
        "Invalid CSS color: only hex (#rrggbb) and rgb()/rgba() allowed, got '{trimmed}'"
    ))
}

fn check_injection_patterns(value: &str) -> Result<(), String> {
    let lower = value.to_lowercase();

    for pattern in ["expression(", "url(", "javascript:", "import", "behavior:"] {
        if lower.contains(pattern) {
            return Err(format!("CSS injection blocked: contains '{pattern}'"));
        }
    }

    // Structural characters could close the style attribute or the rule.
    for ch in [';', '{', '}', '<', '>', '"'] {
        if value.contains(ch) {
            return Err(format!("CSS injection blocked: contains '{ch}'"));
        }
    }

    Ok(())
}

fn validate_hex_color(value: &str) -> Result<(), String> {
    let hex = &value[1..];

    if !matches!(hex.len(), 3 | 4 | 6 | 8) {
        return Err(format!(
            "Invalid hex color length: expected 3/4/6/8 digits, got {} in '{value}'",
            hex.len()
        ));
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color: non-hex character in '{value}'"));
    }

    Ok(())
}

fn validate_rgb_function(value: &str) -> Result<(), String> {
    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("Malformed rgb/rgba: '{value}'"))?;

    let parts: Vec<&str> = inner.split(',').map(|s| s.trim()).collect();

    let expected = if value.starts_with("rgba(") { 4 } else { 3 };
    if parts.len() != expected {
        return Err(format!(
            "Expected {expected} arguments in '{value}', got {}",
            parts.len()
        ));
    }

    for (i, part) in parts.iter().enumerate() {
        if part.parse::<f64>().is_err() {
            return Err(format!(
                "Non-numeric argument at position {i} in '{value}': '{part}'"
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_hex_colors() {
        assert!(validate_css_color("#fff").is_ok());
        assert!(validate_css_color("#fffa").is_ok());
        assert!(validate_css_color("#f97316").is_ok());
        assert!(validate_css_color("#fde04780").is_ok());
    }

    #[test]
    fn invalid_hex_colors() {
        assert!(validate_css_color("#ff").is_err());
        assert!(validate_css_color("#fffff").is_err());
        assert!(validate_css_color("#gggggg").is_err());
    }

    #[test]
    fn valid_rgb_functions() {
        assert!(validate_css_color("rgb(255, 0, 0)").is_ok());
        assert!(validate_css_color("rgba(249,115,22,0.8)").is_ok());
    }

    #[test]
    fn invalid_rgb_functions() {
        assert!(validate_css_color("rgba(0, 0, 0)").is_err());
        assert!(validate_css_color("rgb(0, 0)").is_err());
        assert!(validate_css_color("rgb(red, 0, 0)").is_err());
        assert!(validate_css_color("rgb(1, 2, 3").is_err());
    }

    #[test]
    fn rejects_attribute_breakout() {
        assert!(validate_css_color("#fff\" onmouseover=\"alert(1)").is_err());
        assert!(validate_css_color("#fff; background: url(x)").is_err());
        assert!(validate_css_color("#fff><script>").is_err());
    }

    #[test]
    fn rejects_injection_keywords() {
        assert!(validate_css_color("expression(alert(1))").is_err());
        assert!(validate_css_color("javascript:alert(1)").is_err());
        assert!(validate_css_color("@import url(evil.css)").is_err());
    }

    #[test]
    fn rejects_named_colors_and_empty() {
        assert!(validate_css_color("white").is_err());
        assert!(validate_css_color("").is_err());
        assert!(validate_css_color("   ").is_err());
    }
}
