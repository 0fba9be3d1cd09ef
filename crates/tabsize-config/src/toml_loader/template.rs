//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# tabsize configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[resize]
# animate = true
# Skip the frame update when the window already has the computed frame.
# skip_unchanged_frames = false

[window]
# Chrome added above the content area, in points.
# titlebar_height = 28.0   # 0-200
# x = 200.0
# y = 400.0                # bottom edge
# width = 480.0
# height = 328.0

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
}
