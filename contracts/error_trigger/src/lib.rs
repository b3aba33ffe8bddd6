#![no_std]

//! Fails on request so the console's error views can be checked against a
//! live network: host panics, failed assertions and typed contract errors.

mod error;

pub use error::TriggerError;

use soroban_sdk::{contract, contractimpl, Env};

#[contract]
pub struct ErrorTriggerContract;

#[contractimpl]
impl ErrorTriggerContract {
    /// Always traps with a panic
    pub fn trigger_panic(_env: Env) {
        panic!("trigger_panic called");
    }

    /// Traps unless `value` is zero
    pub fn trigger_assert(_env: Env, value: u32) {
        assert!(value == 0, "value must be zero");
    }

    /// Codes 1-3 map to a contract error, anything else is echoed back
    pub fn trigger_custom_error(_env: Env, code: u32) -> Result<u32, TriggerError> {
        match TriggerError::from_code(code) {
            Some(err) => Err(err),
            None => Ok(code),
        }
    }
}
