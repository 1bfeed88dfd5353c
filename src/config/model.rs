use std::fmt::Debug;

#[derive(Debug)]
pub struct Config {
    pub debug_config: DebugConfig,
    pub search_config: SearchConfig,
}

#[derive(Debug)]
pub struct DebugConfig {
    pub print_raw_response: bool,
}

pub struct SearchConfig {
    pub api_key: String,
    pub query: String,
    pub max_results: i32,
}

impl Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("api_key", &"<redacted>")
            .field("query", &self.query)
            .field("max_results", &self.max_results)
            .finish()
    }
}
