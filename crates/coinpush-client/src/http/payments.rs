/*
[INPUT]:  Crypto currency identifiers, payment labels, and form parameters
[OUTPUT]: Payment resources (created payments, statuses, deposit addresses)
[POS]:    HTTP layer - payment lifecycle endpoints
[UPDATE]: When adding new payment endpoints or changing response format
*/

use serde_json::{Map, Value};

use crate::http::{CoinpushClient, Result};

impl CoinpushClient {
    /// Create a payment request for the given crypto currency
    ///
    /// POST /api/create/{currency}
    pub async fn create(&self, currency: &str, params: Map<String, Value>) -> Result<Value> {
        let fragment = format!("create/{}", currency);
        self.make(self.post(&fragment, params)).await
    }

    /// List the status history of a payment by its label
    ///
    /// GET /api/statuses/{label}
    pub async fn statuses(&self, label: &str) -> Result<Value> {
        let fragment = format!("statuses/{}", label);
        self.make(self.get(&fragment)).await
    }

    /// Look up the deposit address of a payment by its label
    ///
    /// GET /api/address/{label}
    pub async fn address(&self, label: &str) -> Result<Value> {
        let fragment = format!("address/{}", label);
        self.make(self.get(&fragment)).await
    }
}
