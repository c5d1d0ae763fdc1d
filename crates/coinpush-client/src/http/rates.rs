/*
[INPUT]:  Fiat codes, amounts, and crypto currency identifiers
[OUTPUT]: Conversion results as raw JSON
[POS]:    HTTP layer - fiat-to-crypto rate endpoints
[UPDATE]: When adding new rate endpoints or changing response format
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::{CoinpushClient, Result};

impl CoinpushClient {
    /// Convert a fiat amount into the equivalent crypto amount
    ///
    /// GET /api/convert/{fiat}/{amount}/{currency}
    pub async fn convert(&self, fiat: &str, amount: Decimal, currency: &str) -> Result<Value> {
        let fragment = format!("convert/{}/{}/{}", fiat, amount, currency);
        self.make(self.get(&fragment)).await
    }
}
