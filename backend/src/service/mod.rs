// Service layer module for the DevConsole backend
pub mod soroban_service;

pub use soroban_service::{
    HealthStatus, LedgerEntryResult, NetworkConfig, NetworkHealth, SorobanError, SorobanService,
};
