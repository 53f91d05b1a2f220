//! HTTP client for the AtB travel planner (TravelMagic).

use crate::config::toml_config::Settings;
use crate::domain::model::{DepartureQuery, StopName};
use crate::domain::ports::{DepartureSource, StopSuggester};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use reqwest::Client;
use std::time::Duration;

/// Opaque constant required by the planner. Its meaning is undocumented.
const DIRECTION: &str = "1";
const SEARCH: &str = "Show travel suggestions";

#[derive(Debug, Clone)]
pub struct AtbClient {
    client: Client,
    timeout: Option<Duration>,
    suggest_endpoint: String,
    departures_endpoint: String,
}

impl AtbClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let timeout = settings.timeout_seconds().map(Duration::from_secs);

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            timeout,
            suggest_endpoint: settings.suggest_endpoint().to_string(),
            departures_endpoint: settings.departures_endpoint().to_string(),
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// `H:M` without zero padding, e.g. `9:5`.
pub fn format_time(now: &NaiveDateTime) -> String {
    format!("{}:{}", now.hour(), now.minute())
}

/// `D.M.YYYY` without zero padding, e.g. `5.4.2019`.
pub fn format_date(now: &NaiveDateTime) -> String {
    format!("{}.{}.{}", now.day(), now.month(), now.year())
}

/// Query string for a trip search, filling in date and time from `now`.
pub fn departure_params(query: &DepartureQuery, now: &NaiveDateTime) -> Vec<(&'static str, String)> {
    let time = query.time.clone().unwrap_or_else(|| format_time(now));
    let date = query.date.clone().unwrap_or_else(|| format_date(now));

    vec![
        ("direction", DIRECTION.to_string()),
        ("from", query.from.clone()),
        ("to", query.to.clone()),
        ("time", time),
        ("date", date),
        ("search", SEARCH.to_string()),
    ]
}

/// Reads the `suggestions` array of an autocomplete response. Anything else
/// (invalid JSON, missing field, wrong type) yields no suggestions.
pub fn parse_suggestions(body: &str) -> Vec<StopName> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Suggestion response is not JSON: {}", e);
            return Vec::new();
        }
    };

    value
        .get("suggestions")
        .and_then(|s| s.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl StopSuggester for AtbClient {
    async fn suggest(&self, query: &str) -> Result<Vec<StopName>> {
        tracing::debug!("Requesting stop suggestions for '{}'", query);

        let body = self
            .client
            .get(&self.suggest_endpoint)
            .query(&[("query", query)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let suggestions = parse_suggestions(&body);
        tracing::debug!("Got {} suggestions for '{}'", suggestions.len(), query);
        Ok(suggestions)
    }
}

#[async_trait]
impl DepartureSource for AtbClient {
    async fn fetch(&self, query: &DepartureQuery) -> Result<String> {
        let now = Local::now().naive_local();
        let params = departure_params(query, &now);
        tracing::debug!("Requesting departures: {:?}", params);

        let response = self
            .client
            .get(&self.departures_endpoint)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Trip planner response status: {}", response.status());
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use httpmock::prelude::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 4, 5)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    fn settings_for(server: &MockServer) -> Settings {
        Settings::with_endpoints(server.url("/StageJSON"), server.url("/svar"))
    }

    #[test]
    fn test_default_client_has_no_deadline() {
        let client =
            AtbClient::new(&Settings::with_endpoints("http://a.test/s", "http://a.test/t")).unwrap();
        assert_eq!(client.timeout(), None);

        let mut settings = Settings::with_endpoints("http://a.test/s", "http://a.test/t");
        settings.service.timeout_seconds = Some(5);
        let client = AtbClient::new(&settings).unwrap();
        assert_eq!(client.timeout(), Some(Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn test_slow_upstream_is_awaited_without_deadline() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/svar");
                then.status(200)
                    .delay(Duration::from_secs(2))
                    .body("<html></html>");
            })
            .await;

        let client = AtbClient::new(&settings_for(&server)).unwrap();
        let query = DepartureQuery {
            from: "A".to_string(),
            to: "B".to_string(),
            date: None,
            time: None,
        };
        let body = client.fetch(&query).await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(body, "<html></html>");
    }

    #[test]
    fn test_time_and_date_are_not_zero_padded() {
        assert_eq!(format_time(&now()), "9:5");
        assert_eq!(format_date(&now()), "5.4.2019");
    }

    #[test]
    fn test_params_use_current_time_when_absent() {
        let query = DepartureQuery {
            from: "Munkegata M4 (Trondheim)".to_string(),
            to: "Solsiden (Trondheim)".to_string(),
            date: None,
            time: None,
        };

        let params = departure_params(&query, &now());

        assert_eq!(
            params,
            vec![
                ("direction", "1".to_string()),
                ("from", "Munkegata M4 (Trondheim)".to_string()),
                ("to", "Solsiden (Trondheim)".to_string()),
                ("time", "9:5".to_string()),
                ("date", "5.4.2019".to_string()),
                ("search", "Show travel suggestions".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_keep_supplied_time() {
        let query = DepartureQuery {
            from: "A".to_string(),
            to: "B".to_string(),
            date: Some("24.12.2019".to_string()),
            time: Some("18:30".to_string()),
        };

        let params = departure_params(&query, &now());

        assert!(params.contains(&("time", "18:30".to_string())));
        assert!(params.contains(&("date", "24.12.2019".to_string())));
    }

    #[test]
    fn test_parse_suggestions_tolerates_bad_bodies() {
        assert_eq!(
            parse_suggestions(r#"{"query": "sol", "suggestions": ["Solsiden (Trondheim)", 4]}"#),
            vec!["Solsiden (Trondheim)".to_string()]
        );
        assert!(parse_suggestions(r#"{"query": "sol"}"#).is_empty());
        assert!(parse_suggestions(r#"{"suggestions": "Solsiden"}"#).is_empty());
        assert!(parse_suggestions("<html>oops</html>").is_empty());
    }

    #[tokio::test]
    async fn test_suggest_sends_query_parameter() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/StageJSON")
                    .query_param("query", "munkegata");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({
                        "query": "munkegata",
                        "suggestions": ["Munkegata M4 (Trondheim)", "Munkegata M5 (Trondheim)"]
                    }));
            })
            .await;

        let client = AtbClient::new(&settings_for(&server)).unwrap();
        let suggestions = client.suggest("munkegata").await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(
            suggestions,
            vec![
                "Munkegata M4 (Trondheim)".to_string(),
                "Munkegata M5 (Trondheim)".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_all_trip_parameters() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/svar")
                    .query_param("direction", "1")
                    .query_param("from", "Munkegata M4 (Trondheim)")
                    .query_param("to", "Solsiden (Trondheim)")
                    .query_param("time", "13:45")
                    .query_param("date", "5.4.2019")
                    .query_param("search", "Show travel suggestions");
                then.status(200).body("<html></html>");
            })
            .await;

        let client = AtbClient::new(&settings_for(&server)).unwrap();
        let query = DepartureQuery {
            from: "Munkegata M4 (Trondheim)".to_string(),
            to: "Solsiden (Trondheim)".to_string(),
            date: Some("5.4.2019".to_string()),
            time: Some("13:45".to_string()),
        };
        let body = client.fetch(&query).await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_server_error_is_a_transport_failure() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/svar");
                then.status(500);
            })
            .await;

        let client = AtbClient::new(&settings_for(&server)).unwrap();
        let query = DepartureQuery {
            from: "A".to_string(),
            to: "B".to_string(),
            date: None,
            time: None,
        };
        let err = client.fetch(&query).await.unwrap_err();

        api_mock.assert_async().await;
        assert!(matches!(err, crate::utils::error::AtbError::HttpError(_)));
        assert_eq!(err.exit_code(), 3);
    }
}
