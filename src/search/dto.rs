use crate::extractor::model::RawResult;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const TOPIC: &str = "general";
const SEARCH_DEPTH: &str = "advanced";

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub topic: &'static str,
    pub search_depth: &'static str,
    pub max_results: i32,
    pub include_answer: bool,
    pub include_raw_content: bool,
    pub include_images: bool,
}

impl<'a> SearchRequest<'a> {
    pub fn new(query: &'a str, max_results: i32) -> Self {
        Self {
            query,
            topic: TOPIC,
            search_depth: SEARCH_DEPTH,
            max_results,
            include_answer: true,
            include_raw_content: true,
            include_images: true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<ResponseResult>,
}

// Note: the provider sends null for whatever it couldn't fetch
#[derive(Debug, Deserialize)]
pub struct ResponseResult {
    #[serde(default, deserialize_with = "deserialize_str")]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub raw_content: Option<String>,
}

impl ResponseResult {
    pub fn to_model(&self) -> RawResult {
        RawResult::new(
            &self.title,
            self.content.as_deref(),
            self.raw_content.as_deref(),
        )
    }
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}
