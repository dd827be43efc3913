pub mod config;
pub mod error;

pub use config::FeedConfig;
pub use error::{AppError, Result};
