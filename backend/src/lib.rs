pub mod api_error;
pub mod config;
pub mod http;
pub mod middleware;
pub mod models;
pub mod service;
pub mod soroban;
pub mod telemetry;
