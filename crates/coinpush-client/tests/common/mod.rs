/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for coinpush-client tests

use coinpush_client::{CoinpushClient, Config};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the given mock server
pub fn mock_client(server: &MockServer) -> CoinpushClient {
    CoinpushClient::with_config(Config::with_base_url(server.uri())).expect("client init")
}

/// Build a testnet-routed client pointed at the given mock server
pub fn mock_testnet_client(server: &MockServer) -> CoinpushClient {
    let mut config = Config::with_base_url(server.uri());
    config.use_testnet();
    CoinpushClient::with_config(config).expect("client init")
}
