//! Configuration validation.
//!
//! Validates numeric ranges and collects every error into a single
//! `ConfigError`.

mod helpers;


use crate::schema::TabsizeConfig;
use tabsize_common::ConfigError;

use helpers::validate_range_f64;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TabsizeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &TabsizeConfig) {
    let window = &config.window;
    validate_range_f64(
        errors,
        "window.titlebar_height",
        window.titlebar_height,
        0.0,
        200.0,
    );
    validate_range_f64(errors, "window.width", window.width, 1.0, 16384.0);
    validate_range_f64(errors, "window.height", window.height, 1.0, 16384.0);
    if !window.x.is_finite() {
        errors.push(format!("window.x = {} is not finite", window.x));
    }
    if !window.y.is_finite() {
        errors.push(format!("window.y = {} is not finite", window.y));
    }
}
