// dnac-api: Async Rust client for the DNA Center style controller REST API

pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod headers;
pub mod response;
pub mod transport;

pub use auth::AuthToken;
pub use client::{DnacClient, controller_url};
pub use endpoint::{ApiOperation, Endpoint, resolve};
pub use error::Error;
pub use response::{ApiResponse, ResponseBody};
pub use transport::{TlsMode, TransportConfig};
