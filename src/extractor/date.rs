use super::model::TBA;
use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

/// Anything at or below this is most likely a partial date gone wrong
const LAST_IMPLAUSIBLE_YEAR: i32 = 2020;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

struct DatePattern {
    name: &'static str,
    regex: Regex,
    parse: fn(&str, i32) -> Option<NaiveDate>,
}

lazy_static! {
    /// Tried in order, the first one yielding a plausible date wins
    static ref DATE_PATTERNS: [DatePattern; 3] = [
        DatePattern {
            name: "weekday day month",
            regex: Regex::new(
                r"(?i)\b(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun)[a-z]*,?\s+\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s*\d{0,4}"
            )
            .expect("Failed to create weekday date regex"),
            parse: parse_weekday_date,
        },
        DatePattern {
            name: "iso",
            regex: Regex::new(r"\d{4}-\d{2}-\d{2}").expect("Failed to create ISO date regex"),
            parse: parse_iso_date,
        },
        DatePattern {
            name: "day full-month year",
            regex: Regex::new(
                r"(?i)\b\d{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}\b"
            )
            .expect("Failed to create full month date regex"),
            parse: parse_full_month_date,
        },
    ];
}

/**
Finds the first plausible date in the text, formatted as `YYYY-MM-DD`, or [`TBA`].
* reference_year: used when the date carries no year of its own
*/
pub fn extract_date(text: &str, reference_year: i32) -> String {
    if text.is_empty() {
        return TBA.to_string();
    }

    DATE_PATTERNS
        .iter()
        .find_map(|pattern| {
            let raw_date = pattern.regex.find(text)?.as_str().replace('\u{2022}', "-");
            let raw_date = raw_date.trim();

            match (pattern.parse)(raw_date, reference_year) {
                Some(date) if date.year() > LAST_IMPLAUSIBLE_YEAR => Some(date),
                parsed => {
                    trace!(
                        "Discarding '{}' matched as {} date (parsed as {:?})",
                        raw_date,
                        pattern.name,
                        parsed
                    );
                    None
                }
            }
        })
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| TBA.to_string())
}

/// e.g. "Fri, 18 Apr", "Saturday 3 May. 2025"
fn parse_weekday_date(raw_date: &str, reference_year: i32) -> Option<NaiveDate> {
    let mut tokens = raw_date
        .split(|c: char| c.is_whitespace() || c == ',' || c == '.')
        .filter(|token| !token.is_empty())
        .skip(1);

    let day: u32 = tokens.next()?.parse().ok()?;
    let month = month_number(tokens.next()?)?;
    let year = match tokens.next() {
        None => reference_year,
        Some(year) => parse_year(year)?,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_iso_date(raw_date: &str, _reference_year: i32) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").ok()
}

/// e.g. "25 April 2025"
fn parse_full_month_date(raw_date: &str, _reference_year: i32) -> Option<NaiveDate> {
    let mut tokens = raw_date.split_whitespace();

    let day: u32 = tokens.next()?.parse().ok()?;
    let month = month_number(tokens.next()?)?;
    let year = tokens.next()?.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Accepts the month name or any prefix of it with at least three letters
fn month_number(token: &str) -> Option<u32> {
    let token = token.to_lowercase();

    if token.len() < 3 {
        return None;
    }

    MONTHS
        .iter()
        .position(|month| month.starts_with(&token))
        .map(|index| index as u32 + 1)
}

fn parse_year(token: &str) -> Option<i32> {
    let year: i32 = token.parse().ok()?;

    match token.len() {
        4 => Some(year),
        2 => Some(2000 + year),
        _ => None,
    }
}
