// src/error/mod.rs

mod types;

pub use types::{ApiError, ApiResult, ConfigError, TransportFailure};
