//! Catalog Client - HTTP client for the product catalog API
//!
//! Wraps the remote catalog's REST operations and file upload behind one
//! error type.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::CatalogClient;
