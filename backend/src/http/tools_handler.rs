use crate::api_error::ApiError;
use crate::http::AppState;
use crate::models::{raw_from_value, ArgKind, ContractIdentifier, DurabilityClass, TypedArgument};
use crate::soroban::ledger_key::{derive_storage_key, to_key_bytes, wasm_hash};
use crate::soroban::scval::{encode, encode_argument};
use crate::soroban::state_diff::{compute_state_diff, StateDiff};
use crate::soroban::wasm_spec::has_functions;
use crate::soroban::xdr_decoder::{decode_default, encode_json, XdrJsonError, XdrJsonType};
use actix_web::{web, HttpResponse, Responder};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stellar_xdr::curr::{Limits, WriteXdr};
use tracing::{debug, info, warn};

// =============================================================================
// SCVAL ENCODING
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct EncodeArgumentsRequest {
    pub args: Vec<TypedArgument>,
}

#[derive(Debug, Serialize)]
pub struct EncodedArgument {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: ArgKind,
    pub xdr: String,
    pub json: serde_json::Value,
}

/// POST /api/tools/scval
/// Encode typed form arguments; the first invalid argument fails the request
pub async fn encode_arguments(
    req: web::Json<EncodeArgumentsRequest>,
) -> Result<impl Responder, ApiError> {
    info!(count = req.args.len(), "Received encode arguments request");

    let mut values = Vec::with_capacity(req.args.len());
    for arg in &req.args {
        let value = encode_argument(arg)?;
        let xdr = value
            .to_xdr(Limits::none())
            .map(|bytes| general_purpose::STANDARD.encode(bytes))
            .map_err(XdrJsonError::from)?;
        let json = serde_json::to_value(&value).map_err(|e| {
            warn!(arg_id = %arg.id, error = %e, "Failed to render encoded value as JSON");
            ApiError::InternalServerError
        })?;

        values.push(EncodedArgument {
            id: arg.id.clone(),
            name: arg.name.clone(),
            kind: arg.kind,
            xdr,
            json,
        });
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({ "values": values })))
}

// =============================================================================
// LEDGER KEY
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct StorageKeyInput {
    #[serde(rename = "type")]
    pub kind: ArgKind,
    pub value: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct LedgerKeyRequest {
    pub contract_id: String,
    pub key: StorageKeyInput,
    #[serde(default)]
    pub durability: DurabilityClass,
}

/// POST /api/tools/ledger-key
/// Derive the ledger key of one contract-data entry
pub async fn ledger_key(req: web::Json<LedgerKeyRequest>) -> Result<impl Responder, ApiError> {
    let req = req.into_inner();
    info!(
        contract_id = %req.contract_id,
        key_type = %req.key.kind,
        durability = %req.durability,
        "Received ledger key request"
    );

    let contract: ContractIdentifier = req.contract_id.parse()?;
    let key = encode(req.key.kind, &raw_from_value(req.key.value))?;
    let ledger_key = derive_storage_key(&contract, key, req.durability);
    let bytes = to_key_bytes(&ledger_key).map_err(XdrJsonError::from)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "xdr": bytes.to_base64(),
        "key": ledger_key
    })))
}

// =============================================================================
// XDR DECODE / ENCODE
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct DecodeXdrRequest {
    pub xdr: String,
}

/// POST /api/tools/xdr/decode
/// Blind-decode a base64 XDR blob against the known schemas
pub async fn decode_xdr(req: web::Json<DecodeXdrRequest>) -> Result<impl Responder, ApiError> {
    debug!(len = req.xdr.len(), "Received XDR decode request");

    let decoded = decode_default(&req.xdr)?;
    info!(schema = decoded.label, "Decoded XDR blob");

    let json = decoded.to_json().map_err(|e| {
        warn!(schema = decoded.label, error = %e, "Failed to render decoded record as JSON");
        ApiError::InternalServerError
    })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "type": decoded.label,
        "decoded": json
    })))
}

#[derive(Debug, Deserialize)]
pub struct EncodeXdrRequest {
    /// JSON document, either inline or as JSON text
    pub json: serde_json::Value,
    #[serde(rename = "type")]
    pub kind: XdrJsonType,
}

/// POST /api/tools/xdr/encode
/// Build base64 XDR from the JSON form of a supported type
pub async fn encode_xdr(req: web::Json<EncodeXdrRequest>) -> Result<impl Responder, ApiError> {
    let req = req.into_inner();
    info!(kind = ?req.kind, "Received XDR encode request");

    let xdr = encode_json(&raw_from_value(req.json), req.kind)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "xdr": xdr })))
}

// =============================================================================
// WASM FUNCTIONS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct WasmFunctionsRequest {
    pub wasm_base64: String,
}

/// POST /api/tools/wasm/functions
/// Mine probable function names from an uploaded module
pub async fn wasm_functions(
    state: web::Data<AppState>,
    req: web::Json<WasmFunctionsRequest>,
) -> Result<impl Responder, ApiError> {
    let module = general_purpose::STANDARD
        .decode(req.wasm_base64.trim())
        .map_err(|e| ApiError::BadRequest(format!("wasm_base64 is not valid base64: {}", e)))?;

    let functions = state.spec_miner.mine(&module);
    let hash = wasm_hash(&module);
    info!(
        size = module.len(),
        functions = functions.len(),
        "Mined WASM function names"
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "has_functions": has_functions(&functions),
        "functions": functions,
        "wasm_hash": hex::encode(hash)
    })))
}

// =============================================================================
// STATE DIFF
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct StateDiffRequest {
    #[serde(default)]
    pub old_state: BTreeMap<String, String>,
    #[serde(default)]
    pub new_state: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct StateDiffResponse {
    pub diffs: Vec<StateDiff>,
}

/// POST /api/tools/state-diff
/// Compare two storage snapshots
pub async fn state_diff(req: web::Json<StateDiffRequest>) -> Result<impl Responder, ApiError> {
    let diffs = compute_state_diff(&req.old_state, &req.new_state);
    debug!(changes = diffs.len(), "Computed state diff");

    Ok(HttpResponse::Ok().json(StateDiffResponse { diffs }))
}
