use eventscout::config::model::SearchConfig;
use eventscout::extractor::Extractor;
use eventscout::search::api::SearchAPI;
use std::env;

fn build_config() -> SearchConfig {
    SearchConfig {
        api_key: env::var("SEARCH_API_KEY").expect("SEARCH_API_KEY not set"),
        query: "upcoming music concerts in Delhi".to_string(),
        max_results: 3,
    }
}

#[test_log::test(tokio::test)]
#[ignore = "hits the live search provider, needs SEARCH_API_KEY"]
async fn should_search_events() {
    let results = SearchAPI::search(&build_config(), false).await.unwrap();

    assert!(!results.is_empty());
    assert!(results.len() <= 3);
}

#[test_log::test(tokio::test)]
#[ignore = "hits the live search provider, needs SEARCH_API_KEY"]
async fn should_extract_events_from_live_results() {
    let results = SearchAPI::search(&build_config(), false).await.unwrap();

    let events = Extractor::default().extract(&results);

    assert!(events.len() <= results.len());
    assert!(events.iter().all(|event| !event.title.is_empty()));
}
