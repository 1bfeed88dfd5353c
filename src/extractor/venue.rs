use super::model::TBA;
use lazy_static::lazy_static;
use regex::Regex;

const VENUE_KEYWORDS: [&str; 10] = [
    "auditorium",
    "hall",
    "stadium",
    "center",
    "centre",
    "arena",
    "grounds",
    "club",
    "theatre",
    "social",
];

lazy_static! {
    /// Listings often come as "Venue Name: City"
    static ref LABELLED_LINE: Regex =
        Regex::new(r"(?m)^(.+?)\s*:\s*(.+?)$").expect("Failed to create labelled line regex");
    static ref PRICE_SUFFIX: Regex =
        Regex::new(r"\s*\p{Sc}.*").expect("Failed to create price regex");
}

/// Guesses the venue from the text, or [`TBA`]
pub fn extract_venue(text: &str) -> String {
    if text.is_empty() {
        return TBA.to_string();
    }

    labelled_venue(text)
        .or_else(|| keyword_venue(text))
        .unwrap_or_else(|| TBA.to_string())
}

fn labelled_venue(text: &str) -> Option<String> {
    LABELLED_LINE
        .captures_iter(text)
        .map(|captures| captures[1].trim().to_string())
        .find(|label| !label.is_empty())
}

fn keyword_venue(text: &str) -> Option<String> {
    text.lines()
        .filter(|line| {
            let line = line.to_lowercase();

            VENUE_KEYWORDS.iter().any(|keyword| line.contains(keyword))
        })
        .map(|line| PRICE_SUFFIX.replace(line, "").trim().to_string())
        .find(|venue| !venue.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn when_text_is_empty_should_be_tba() {
        assert_eq!(extract_venue(""), TBA);
    }

    #[test_log::test]
    fn should_take_label_before_colon() {
        assert_eq!(extract_venue("Kingdom of Dreams : Gurugram"), "Kingdom of Dreams");
    }

    #[test_log::test]
    fn should_take_first_labelled_line() {
        assert_eq!(
            extract_venue("Live this weekend\nSiri Fort Auditorium: New Delhi\nTickets: ₹499"),
            "Siri Fort Auditorium"
        );
    }

    #[test_log::test]
    fn labelled_line_should_win_over_keyword_line() {
        assert_eq!(
            extract_venue("Jazz Night: 2025-05-10 at City Auditorium"),
            "Jazz Night"
        );
    }

    #[test_log::test]
    fn should_fall_back_to_line_with_venue_keyword() {
        assert_eq!(
            extract_venue("An evening of ghazals\nKamani Auditorium, Mandi House"),
            "Kamani Auditorium, Mandi House"
        );
    }

    #[test_log::test]
    fn keyword_match_should_ignore_case() {
        assert_eq!(extract_venue("JLN STADIUM"), "JLN STADIUM");
    }

    #[test_log::test]
    fn should_strip_price_from_keyword_line() {
        assert_eq!(
            extract_venue("Habitat Centre, Lodhi Road ₹ 1,200 onwards"),
            "Habitat Centre, Lodhi Road"
        );
        assert_eq!(extract_venue("The Comedy Club $25"), "The Comedy Club");
    }

    #[test_log::test]
    fn when_keyword_line_is_only_a_price_should_keep_looking() {
        assert_eq!(
            extract_venue("₹300 per club entry\nTalkatora Indoor Stadium"),
            "Talkatora Indoor Stadium"
        );
    }

    #[test_log::test]
    fn when_nothing_looks_like_a_venue_should_be_tba() {
        assert_eq!(extract_venue("Just some words about an event"), TBA);
        assert_eq!(extract_venue("   "), TBA);
    }

    #[test_log::test]
    fn when_label_is_blank_should_fall_back() {
        assert_eq!(extract_venue(" : nothing here"), TBA);
    }
}
