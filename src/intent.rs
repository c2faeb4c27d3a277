const WEATHER_PREFIX: &str = "weather";
const TOGGLE_UNITS: &str = "toggle units";

/// Classified meaning of an inbound text command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// "weather" with no city, or the prefix followed by only whitespace.
    PromptForCity,
    /// "weather <city>"; city is trimmed, first character upper-cased.
    WeatherRequest { city: String },
    /// "toggle units" — flip between Celsius and Fahrenheit.
    ToggleUnits,
    /// Anything else; no reply is produced.
    Unhandled,
}

/// Classify a text message. Matching is case-insensitive and exact/prefix
/// based — no fuzzy matching, no tokenization.
pub fn interpret(text: &str) -> Intent {
    let trimmed = text.trim();
    let normalized = trimmed.to_lowercase();

    if normalized == WEATHER_PREFIX {
        return Intent::PromptForCity;
    }

    if normalized.starts_with(WEATHER_PREFIX) {
        // Take the remainder from the original text so the city keeps its case.
        let city = trimmed
            .get(WEATHER_PREFIX.len()..)
            .map(|rest| capitalize_first(rest.trim()))
            .unwrap_or_default();

        return if city.is_empty() {
            Intent::PromptForCity
        } else {
            Intent::WeatherRequest { city }
        };
    }

    if normalized == TOGGLE_UNITS {
        return Intent::ToggleUnits;
    }

    Intent::Unhandled
}

/// Upper-case the first character, leave the rest unchanged. This is NOT a
/// title-case: "new york" becomes "New york".
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
