//! Transports

mod http;
#[cfg(feature = "in-process")]
mod http_oneshot;

pub use self::http::{HttpClient, NetworkHttpClient, decode_response};
#[cfg(feature = "in-process")]
pub use self::http_oneshot::OneshotHttpClient;
