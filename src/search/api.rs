use super::dto::{SearchRequest, SearchResponse};
use crate::config::model::SearchConfig;
use crate::extractor::model::RawResult;
use lazy_static::lazy_static;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use std::fmt::Display;
use tracing::{debug, error, info};

const SEARCH_URL: &str = "https://api.tavily.com/search";
const MAX_RETRIES: u32 = 5;

lazy_static! {
    static ref REST_CLIENT: ClientWithMiddleware = ClientBuilder::new(Client::new())
        .with(RetryTransientMiddleware::new_with_policy(
            ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES)
        ))
        .build();
}

pub struct SearchAPI;

impl SearchAPI {
    /**
    Runs the configured query and returns the hits in the provider's order
    * print_raw_response: pretty-prints the provider's body to stdout before parsing it
    */
    #[tracing::instrument(skip(config), fields(query = %config.query))]
    pub async fn search(
        config: &SearchConfig,
        print_raw_response: bool,
    ) -> Result<Vec<RawResult>, APIError> {
        info!("Searching for up to {} results", config.max_results);

        let request = SearchRequest::new(&config.query, config.max_results);
        let body = serde_json::to_string(&request).map_err(|e| {
            error!("Request serialization failed: {:?}", e);
            APIError::RequestFailed(e.to_string())
        })?;

        let json_response = REST_CLIENT
            .post(SEARCH_URL)
            .bearer_auth(&config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!("Error sending request: {:?}", e);
                APIError::RequestFailed(e.to_string())
            })?
            .error_for_status()
            .map_err(|e| {
                error!("Request failed: {:?}", e);
                APIError::RequestFailed(e.to_string())
            })?
            .text()
            .await
            .map_err(|e| {
                error!("Received invalid response: {:?}", e);
                APIError::InvalidResponse
            })?;

        debug!("Raw response: {}", json_response);

        if print_raw_response {
            print_pretty(&json_response);
        }

        Self::parse_response(&json_response)
    }

    fn parse_response(json_response: &str) -> Result<Vec<RawResult>, APIError> {
        match serde_json::from_str::<SearchResponse>(json_response) {
            Ok(parsed_response) => {
                let results: Vec<RawResult> = parsed_response
                    .results
                    .iter()
                    .map(|result| result.to_model())
                    .collect();

                info!("Got {} results", results.len());

                Ok(results)
            }
            Err(e) => {
                error!("Response parse failed: {:?}", e);
                Err(APIError::InvalidResponse)
            }
        }
    }
}

fn print_pretty(json_response: &str) {
    let pretty = serde_json::from_str::<serde_json::Value>(json_response)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| json_response.to_string());

    println!("\nRAW API RESPONSE:\n");
    println!("{}", pretty);
    println!("\n{}\n", "=".repeat(60));
}

#[derive(Debug)]
pub enum APIError {
    RequestFailed(String),
    InvalidResponse,
}

impl Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            APIError::RequestFailed(reason) => write!(f, "Search request failed: {}", reason),
            APIError::InvalidResponse => write!(f, "Search provider sent an invalid response"),
        }
    }
}

impl std::error::Error for APIError {}
