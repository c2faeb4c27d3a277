use serde::{Deserialize, Serialize};

/// Per-chat preferences. `use_imperial` is false for Celsius (the default)
/// and true for Fahrenheit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UserPrefs {
    pub use_imperial: bool,
}
