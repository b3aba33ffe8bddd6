//! Soroban value codec, key derivation and inspection tools
//!
//! Sub-modules:
//! - [`scval`]       typed form arguments → `ScVal`
//! - [`ledger_key`]  storage / instance / code ledger keys
//! - [`xdr_decoder`] blind base64 XDR decoding and JSON → XDR
//! - [`wasm_spec`]   best-effort function names from `contractspecv0`
//! - [`rpc_errors`]  readable RPC error messages
//! - [`state_diff`]  storage snapshot comparison
//!
//! Everything here is pure and synchronous; network access lives in
//! `service::soroban_service`.

pub mod error;
pub mod ledger_key;
pub mod rpc_errors;
pub mod scval;
pub mod state_diff;
pub mod wasm_spec;
pub mod xdr_decoder;

pub use error::{DecodeError, EncodeError};
pub use ledger_key::{
    contract_code_key, contract_instance_key, derive_storage_key, derive_storage_key_bytes,
    wasm_hash,
};
pub use rpc_errors::describe_rpc_error;
pub use scval::{encode, encode_argument, encode_arguments};
pub use state_diff::{compute_state_diff, ChangeType, StateDiff};
pub use wasm_spec::{mine_function_names, SpecMiner, SpecMinerConfig};
pub use xdr_decoder::{
    decode, decode_default, encode_json, CandidateSchema, DecodedRecord, XdrJsonType, XdrRecord,
    DEFAULT_SCHEMAS,
};
