/*
[INPUT]:  Client configuration and payment API endpoints
[OUTPUT]: Decoded JSON responses and normalized request errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing dispatch behavior
*/

pub mod charges;
pub mod client;
pub mod error;
pub mod payments;
pub mod rates;
pub mod request;

pub use error::{CoinpushError, RequestError, Result};
pub use request::{Dispatcher, PendingRequest, RequestOptions, RAW_BODY_KEY};

pub use client::{CoinpushClient, PACKAGE_MANAGER_HEADER, PACKAGE_VERSION_HEADER};
