mod cache;
mod config;
mod error;
mod fetch;
mod service;
mod transport;

pub use cache::{CachedResponse, Endpoint, RequestKey, ResponseCache};
pub use config::{resolve_api_base, Config};
pub use error::{Error, Result};
pub use fetch::{FetchGate, FetchState};
pub use service::PredictionService;
pub use transport::{HttpTransport, PredictTransport};
