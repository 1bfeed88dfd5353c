use crate::config::model::{Config, DebugConfig, SearchConfig};
use std::env;

const DEFAULT_QUERY: &str =
    "upcoming events in Delhi: music comedy concerts business food festivals dance";
const DEFAULT_MAX_RESULTS: i32 = 10;

pub fn load_config() -> Config {
    let api_key = load_required_config("SEARCH_API_KEY");
    let query = env::var("SEARCH_QUERY").unwrap_or_else(|_| DEFAULT_QUERY.to_string());
    let max_results = parse_i32_config("SEARCH_MAX_RESULTS", env::var("SEARCH_MAX_RESULTS").ok())
        .unwrap_or(DEFAULT_MAX_RESULTS);

    let print_raw_response = parse_bool_config(
        "DEBUG_PRINT_RAW_RESPONSE",
        env::var("DEBUG_PRINT_RAW_RESPONSE").ok(),
        false,
    );

    Config {
        debug_config: DebugConfig { print_raw_response },
        search_config: SearchConfig {
            api_key,
            query,
            max_results,
        },
    }
}

fn load_required_config(name: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| panic!("{} must be set.", name))
}

fn parse_bool_config(name: &str, value: Option<String>, default: bool) -> bool {
    value
        .unwrap_or_else(|| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'true' or 'false'",
                name
            )
        })
}

fn parse_i32_config(name: &str, value: Option<String>) -> Option<i32> {
    value.map(|value| {
        value
            .parse()
            .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected an integer number.", name))
    })
}
