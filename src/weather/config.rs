use serde::Deserialize;

/// OpenWeather current-conditions response, reduced to the fields the bot
/// consumes. The provider embeds its own status in `cod` (integer 200 on
/// success, often a string like "404" on errors), so the success fields are
/// optional and checked after the status.
#[derive(Clone, Debug, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub cod: serde_json::Value,
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub weather: Vec<WeatherEntry>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WeatherEntry {
    pub description: String,
    pub icon: String,
}
