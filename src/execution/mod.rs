pub mod gateway;

pub use gateway::{ExecutionGateway, ExecutionResult};
