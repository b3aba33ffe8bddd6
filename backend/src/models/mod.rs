// Core models for the DevConsole backend
pub mod contract_arg;
pub mod history;
pub mod storage;

// Re-export commonly used types
pub use contract_arg::*;
pub use history::*;
pub use storage::*;
