/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Coinpush client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod http;

// Re-export commonly used types from config
pub use config::Config;

// Re-export commonly used types from http
pub use http::{
    CoinpushClient,
    CoinpushError,
    Dispatcher,
    PendingRequest,
    RequestError,
    RequestOptions,
    Result,
};
