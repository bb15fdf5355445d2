mod app;
mod config;
mod dispatch;
mod fetch;
mod http;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use dispatch::DispatchError;
pub use fetch::FetchError;
pub use http::HttpError;
pub use validation::ValidationError;
