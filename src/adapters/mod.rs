// Adapters layer: concrete product sources (HTTP API, local JSON file).

pub mod file;
pub mod http;

pub use file::FileProductSource;
pub use http::HttpProductSource;
