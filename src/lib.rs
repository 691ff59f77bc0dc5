pub mod config;
pub mod dataset;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod metadata;

pub use error::FetchError;

pub type Result<T> = std::result::Result<T, FetchError>;
