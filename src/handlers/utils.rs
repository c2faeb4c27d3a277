use crate::cards::{AdaptiveCard, Element};

/// Flatten a card's text blocks into caption lines, in document order.
pub fn card_caption(card: &AdaptiveCard) -> String {
    let mut lines = Vec::new();
    for element in &card.body {
        collect_text(element, &mut lines);
    }
    lines.join("\n")
}

/// First image url in the card, if any.
pub fn card_image_url(card: &AdaptiveCard) -> Option<&str> {
    card.body.iter().find_map(find_image)
}

fn collect_text<'a>(element: &'a Element, out: &mut Vec<&'a str>) {
    match element {
        Element::TextBlock(block) => out.push(&block.text),
        Element::Image { .. } => {}
        Element::ColumnSet { columns } => {
            for column in columns {
                for item in &column.items {
                    collect_text(item, out);
                }
            }
        }
    }
}

fn find_image(element: &Element) -> Option<&str> {
    match element {
        Element::Image { url, .. } => Some(url),
        Element::TextBlock(_) => None,
        Element::ColumnSet { columns } => columns
            .iter()
            .flat_map(|column| column.items.iter())
            .find_map(find_image),
    }
}
