use serde::Serialize;
use std::fmt::Display;

/// Marks a field that couldn't be determined from the text
pub const TBA: &str = "TBA";

/// An unstructured search hit, as supplied by the search provider
#[derive(Debug, Clone, Default)]
pub struct RawResult {
    pub title: String,
    pub content: Option<String>,
    pub raw_content: Option<String>,
}

impl RawResult {
    pub fn new(title: &str, content: Option<&str>, raw_content: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            content: content.map(str::to_string),
            raw_content: raw_content.map(str::to_string),
        }
    }

    /// Raw content followed by the snippet, missing fields counting as empty
    pub fn full_text(&self) -> String {
        format!(
            "{} {}",
            self.raw_content.as_deref().unwrap_or_default(),
            self.content.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEvent {
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Either `YYYY-MM-DD` or [`TBA`]
    pub date: String,
    /// Either free text or [`TBA`]
    pub venue: String,
}

impl Display for NormalizedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Type: {}", self.event_type)?;
        writeln!(f, "Date: {}", self.date)?;
        write!(f, "Venue: {}", self.venue)
    }
}

#[derive(strum::IntoStaticStr, strum::Display, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventType {
    Comedy,
    Music,
    Dance,
    Food,
    Business,
    Workshop,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn full_text_should_put_raw_content_before_content() {
        let result = RawResult::new("Title", Some("snippet"), Some("page body"));

        assert_eq!(result.full_text(), "page body snippet");
    }

    #[test_log::test]
    fn full_text_should_treat_missing_fields_as_empty() {
        assert_eq!(RawResult::new("Title", Some("snippet"), None).full_text(), "snippet");
        assert_eq!(RawResult::new("Title", None, None).full_text(), "");
    }

    #[test_log::test]
    fn should_serialize_event_type_under_type_key() {
        let event = NormalizedEvent {
            title: "Jazz Night".to_string(),
            event_type: EventType::Music,
            date: "2025-05-10".to_string(),
            venue: TBA.to_string(),
        };

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "Jazz Night",
                "type": "Music",
                "date": "2025-05-10",
                "venue": "TBA"
            })
        );
    }

    #[test_log::test]
    fn should_display_event_as_labelled_lines() {
        let event = NormalizedEvent {
            title: "Comedy Fest".to_string(),
            event_type: EventType::Comedy,
            date: TBA.to_string(),
            venue: "Laugh Club".to_string(),
        };

        assert_eq!(
            event.to_string(),
            "Title: Comedy Fest\nType: Comedy\nDate: TBA\nVenue: Laugh Club"
        );
    }
}
