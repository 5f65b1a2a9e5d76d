use tracing::info;

use super::fetch_ok;
use crate::discourse::DiscourseClient;
use crate::error::Error;

/// Fetches one URL and returns its body unwrapped.
pub async fn run_query(client: &DiscourseClient, url: &str) -> Result<Vec<u8>, Error> {
    let body = fetch_ok(client, url).await?;
    info!("query returned {} bytes", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const SITE: &str = r#"{"default_archetype":"regular","categories":[{"id":56,"name":"Communities"}]}"#;

    #[tracing_test::traced_test]
    #[tokio::test]
    async fn test_query_returns_raw_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/site.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SITE))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = DiscourseClient::new("key", None).unwrap();
        let url = format!("{}/site.json", mock_server.uri());
        let first = run_query(&client, &url).await.unwrap();
        let second = run_query(&client, &url).await.unwrap();
        assert_eq!(first, SITE.as_bytes());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_query_not_found_keeps_body() {
        let mock_server = MockServer::start().await;
        let not_found = r#"{"errors":["The requested URL or resource could not be found."],"error_type":"not_found"}"#;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(not_found))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = DiscourseClient::new("key", None).unwrap();
        let err = run_query(&client, &format!("{}/session/current.json", mock_server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Status { status, .. } if status == StatusCode::NOT_FOUND));
        assert_eq!(err.salvage(), Some(not_found.as_bytes()));
    }
}
