use super::model::EventType;

/// Checked top to bottom, so earlier categories win ties
const CATEGORY_KEYWORDS: [(EventType, &[&str]); 6] = [
    (EventType::Comedy, &["comedy", "stand-up", "standup"]),
    (EventType::Music, &["music", "concert", "gig", "festival", "jazz"]),
    (EventType::Dance, &["dance", "samaaj"]),
    (EventType::Food, &["food", "culinary"]),
    (EventType::Business, &["business", "conference", "seminar"]),
    (EventType::Workshop, &["workshop", "class"]),
];

pub fn determine_type(title: &str, content: &str) -> EventType {
    let text = format!("{} {}", title, content).to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(event_type, _)| *event_type)
        .unwrap_or(EventType::Other)
}
