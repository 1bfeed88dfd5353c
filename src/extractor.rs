pub mod category;
pub mod date;
pub mod model;
pub mod venue;

use crate::extractor::category::determine_type;
use crate::extractor::date::extract_date;
use crate::extractor::model::{NormalizedEvent, RawResult};
use crate::extractor::venue::extract_venue;
use chrono::{Datelike, Local};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Turns raw search hits into normalized events
#[derive(Debug, Clone)]
pub struct Extractor {
    reference_year: i32,
}

impl Default for Extractor {
    /// Dates without a year are assumed to be in the current year
    fn default() -> Self {
        Self::with_reference_year(Local::now().year())
    }
}

impl Extractor {
    pub fn with_reference_year(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /**
    Returns one event per distinct title, keeping the input order.
    Results with a blank title are dropped, and for repeated titles only the first one counts.
    */
    pub fn extract(&self, results: &[RawResult]) -> Vec<NormalizedEvent> {
        let mut seen_titles = HashSet::new();

        let events: Vec<NormalizedEvent> = results
            .iter()
            .filter_map(|result| {
                let title = result.title.trim();

                if title.is_empty() || !seen_titles.insert(title) {
                    trace!("Skipping result titled '{}'", title);
                    return None;
                }

                Some(self.to_event(title, &result.full_text()))
            })
            .collect();

        debug!(
            "Extracted {} events out of {} results",
            events.len(),
            results.len()
        );

        events
    }

    fn to_event(&self, title: &str, full_text: &str) -> NormalizedEvent {
        NormalizedEvent {
            title: title.to_string(),
            event_type: determine_type(title, full_text),
            date: extract_date(full_text, self.reference_year),
            venue: extract_venue(full_text),
        }
    }
}
