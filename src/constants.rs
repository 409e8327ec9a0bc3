//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Resistor Band Calculator";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "bandcode";
