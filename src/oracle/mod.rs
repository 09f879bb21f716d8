pub mod api;
pub mod service;

pub use api::{router, run_server};
pub use service::{OracleNewsResponse, OracleService};
