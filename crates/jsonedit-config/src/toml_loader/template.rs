//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# jsonedit configuration
# Out-of-range or unsafe values fall back to their defaults.
# Only override what you want to change -- missing fields use defaults.

[buttons]
# Every toolbar button is shown unless set to false.
# format = true
# minify = true
# sort = true
# search = true
# copy = true
# download = true
# reset = true
# load = true

[keybinds]
# "Cmd" means Ctrl outside macOS.
# toggle_search = "Cmd+F"
# next_match = "Enter"
# prev_match = "Shift+Enter"
# close_search = "Escape"
# insert_indent = "Tab"

[editor]
# indent_width = 2           # 1-8
# placeholder = "Enter your JSON here..."

[search]
# line_height_px = 18        # 8-64
# context_lines = 5          # 0-50

[highlight]
# Hex or rgb()/rgba() only.
# active_background = "#f97316"
# active_text = "#ffffff"
# inactive_background = "#fde047"
# inactive_text = "#000000"
# border_radius_px = 2       # 0-8

[download]
# filename = "data.json"
# mime_type = "application/json"

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
