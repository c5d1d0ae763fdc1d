/*
[INPUT]:  Fiat codes, charge tokens, and form parameters
[OUTPUT]: Charge resources (created charges, checkout views)
[POS]:    HTTP layer - hosted charge endpoints
[UPDATE]: When adding new charge endpoints or changing response format
*/

use serde_json::{Map, Value};

use crate::http::{CoinpushClient, Result};

impl CoinpushClient {
    /// Create a hosted charge denominated in the given fiat currency
    ///
    /// POST /api/charge/{fiat}
    pub async fn charge(&self, fiat: &str, params: Map<String, Value>) -> Result<Value> {
        let fragment = format!("charge/{}", fiat);
        self.make(self.post(&fragment, params)).await
    }

    /// Fetch the checkout view of a charge by its token
    ///
    /// GET /api/charge/{token}
    pub async fn charge_view(&self, token: &str) -> Result<Value> {
        let fragment = format!("charge/{}", token);
        self.make(self.get(&fragment)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::http::CoinpushClient;
    use serde_json::{json, Map};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_charge() {
        let server = MockServer::start().await;
        let mock_response = json!({
            "results": {
                "token": "tok_6fe0accd",
                "checkout_url": "https://coinpush.io/charge/tok_6fe0accd"
            }
        });

        let _mock = Mock::given(method("POST"))
            .and(path("/api/charge/eur"))
            .and(body_string_contains("amount=25.50"))
            .and(body_string_contains("email=payer%40example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_response.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = CoinpushClient::with_config(Config::with_base_url(server.uri()))
            .expect("client init");

        let mut params = Map::new();
        params.insert("amount".to_string(), json!("25.50"));
        params.insert("email".to_string(), json!("payer@example.com"));
        let response = client.charge("eur", params).await.expect("charge failed");

        assert_eq!(response, mock_response);
    }

    #[tokio::test]
    async fn test_charge_view() {
        let server = MockServer::start().await;
        let mock_response = json!({
            "results": {
                "token": "tok_6fe0accd",
                "status": "pending",
                "amount": "25.50",
                "fiat": "eur"
            }
        });

        let _mock = Mock::given(method("GET"))
            .and(path("/api/charge/tok_6fe0accd"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_response.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = CoinpushClient::with_config(Config::with_base_url(server.uri()))
            .expect("client init");

        let response = client
            .charge_view("tok_6fe0accd")
            .await
            .expect("charge_view failed");

        assert_eq!(response, mock_response);
    }

    #[tokio::test]
    async fn test_charge_view_unknown_token_exposes_error_details() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/charge/tok_missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "unknown token"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = CoinpushClient::with_config(Config::with_base_url(server.uri()))
            .expect("client init");

        let err = client
            .charge_view("tok_missing")
            .await
            .expect_err("expected a 404 failure");

        assert_eq!(err.status_code(), Some(404));
        let response = err.response().expect("error response body");
        assert_eq!(response.get("error"), Some(&json!("unknown token")));
    }
}
