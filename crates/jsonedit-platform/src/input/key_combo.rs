use crate::keymap::{normalize_key_name, KeyBind, Modifier};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_SUPER: u8 = 0b1000;

/// A canonical key representation for HashMap lookup.
///
/// Modifiers are a bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub mods: u8,
    /// Normalized key name (e.g. "F", "Enter", "Tab").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mods = kb.modifiers.iter().fold(0u8, |acc, m| {
            acc | match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            }
        });
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from a host key event: modifier flags plus the raw key name.
    pub fn from_modifiers(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: &str) -> Self {
        let mut mods = 0u8;
        for (held, bit) in [
            (ctrl, MOD_CTRL),
            (alt, MOD_ALT),
            (shift, MOD_SHIFT),
            (super_key, MOD_SUPER),
        ] {
            if held {
                mods |= bit;
            }
        }
        Self {
            mods,
            key: normalize_key_name(key),
        }
    }

    /// Reconstruct a [`KeyBind`] for display purposes.
    pub(super) fn to_keybind(&self) -> KeyBind {
        let modifiers = [
            (MOD_CTRL, Modifier::Ctrl),
            (MOD_ALT, Modifier::Alt),
            (MOD_SHIFT, Modifier::Shift),
            (MOD_SUPER, Modifier::Super),
        ]
        .into_iter()
        .filter(|(bit, _)| self.mods & bit != 0)
        .map(|(_, m)| m)
        .collect();
        KeyBind {
            modifiers,
            key: self.key.clone(),
        }
    }
}
