use jsonedit_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses a keybind string like `"Cmd+F"` or `"Shift+Enter"` into a [`KeyBind`].
///
/// `Cmd`/`Command` is the platform's primary modifier: `Super` on macOS and
/// `Ctrl` elsewhere. `Option` is an alias for `Alt`. The last `+`-separated
/// token is always the key, even if it spells a modifier name.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();

    let Some((key_token, modifier_tokens)) = tokens.split_last() else {
        return Err(PlatformError::NotSupported("empty keybind string".into()));
    };
    if key_token.is_empty() {
        return Err(PlatformError::NotSupported(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = parse_modifier(token).ok_or_else(|| {
            PlatformError::NotSupported(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

fn parse_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" | "mod" => Some(if cfg!(target_os = "macos") {
            Modifier::Super
        } else {
            Modifier::Ctrl
        }),
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

/// Normalize a key name from config or a host key event.
///
/// Browser-style names (`"f"`, `"Enter"`, `" "`) and config spellings
/// (`"Return"`, `"Esc"`) map onto one canonical form.
pub fn normalize_key_name(token: &str) -> String {
    if token == " " {
        return "Space".into();
    }
    let lower = token.trim().to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "space" | "spacebar" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        _ if lower.chars().count() == 1 => lower.to_uppercase(),
        _ => {
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => lower,
            }
        }
    }
}
