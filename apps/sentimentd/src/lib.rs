//! sentimentd host: assembles the sentiment module routes with the HTTP
//! middleware stack and serves them.

pub mod cors;
pub mod request_id;
pub mod server;
