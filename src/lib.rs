pub mod config;
pub mod engine;
pub mod error;
pub mod execution;
pub mod ledger;
pub mod llm;
pub mod news;
pub mod oracle;
pub mod strategies;

pub use engine::{OracleEngine, OracleOutcome};
pub use error::ExecutionError;
pub use execution::{ExecutionGateway, ExecutionResult};
