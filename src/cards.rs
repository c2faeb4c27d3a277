//! Adaptive Card documents for weather replies.
//!
//! Typed model of the small Adaptive Card subset the bot emits: text blocks,
//! an image, and a two-column layout. The card is an opaque presentational
//! document; `handlers::utils` adapts it for Telegram delivery.

use serde::Serialize;

use crate::weather::{Units, WeatherLookup, WeatherReport};

const CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
const CARD_VERSION: &str = "1.3";
const ICON_URL_BASE: &str = "http://openweathermap.org/img/w";

#[derive(Debug, Clone, Serialize)]
pub struct AdaptiveCard {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    pub body: Vec<Element>,
}

impl AdaptiveCard {
    fn new(body: Vec<Element>) -> Self {
        Self {
            kind: "AdaptiveCard",
            schema: CARD_SCHEMA,
            version: CARD_VERSION,
            body,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Element {
    TextBlock(TextBlock),
    Image { url: String, size: &'static str },
    ColumnSet { columns: Vec<Column> },
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub text: String,
    pub wrap: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<&'static str>,
}

impl TextBlock {
    fn plain(text: String) -> Self {
        Self {
            text,
            wrap: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Column {
    #[serde(rename = "type")]
    kind: &'static str,
    pub width: &'static str,
    pub items: Vec<Element>,
}

impl Column {
    fn new(width: &'static str, items: Vec<Element>) -> Self {
        Self {
            kind: "Column",
            width,
            items,
        }
    }
}

/// Build the reply card for a weather lookup: a summary card on success, a
/// single-block apology on failure.
pub fn weather_card(lookup: &WeatherLookup, units: Units) -> AdaptiveCard {
    match lookup {
        WeatherLookup::Report(report) => report_card(report, units),
        WeatherLookup::Unavailable { city } => unavailable_card(city),
    }
}

fn report_card(report: &WeatherReport, units: Units) -> AdaptiveCard {
    let icon_url = format!("{}/{}.png", ICON_URL_BASE, report.icon);

    AdaptiveCard::new(vec![
        Element::TextBlock(TextBlock {
            size: Some("Large"),
            weight: Some("Bolder"),
            ..TextBlock::plain(format!("Weather in {}", report.city))
        }),
        Element::ColumnSet {
            columns: vec![
                Column::new(
                    "auto",
                    vec![
                        Element::Image {
                            url: icon_url,
                            size: "small",
                        },
                        Element::TextBlock(TextBlock::plain(format!(
                            "Humidity: {}%",
                            report.humidity
                        ))),
                    ],
                ),
                Column::new(
                    "stretch",
                    vec![
                        Element::TextBlock(TextBlock {
                            size: Some("ExtraLarge"),
                            weight: Some("Bolder"),
                            height: Some("stretch"),
                            horizontal_alignment: Some("Left"),
                            spacing: Some("Medium"),
                            ..TextBlock::plain(format!(
                                "{}°{}",
                                report.temperature,
                                units.symbol()
                            ))
                        }),
                        Element::TextBlock(TextBlock::plain(format!(
                            "Description: {}",
                            report.description
                        ))),
                    ],
                ),
            ],
        },
    ])
}

fn unavailable_card(city: &str) -> AdaptiveCard {
    AdaptiveCard::new(vec![Element::TextBlock(TextBlock::plain(format!(
        "Sorry, I couldn't retrieve weather information for {}.",
        city
    )))])
}
