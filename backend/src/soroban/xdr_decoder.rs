//! Blind XDR decoding
//!
//! A pasted base64 blob carries no type information. [`decode`] tries an
//! ordered list of candidate schemas and keeps the first one that consumes the
//! whole buffer. Structurally similar encodings can parse under more than one
//! schema, so the order of the list decides the result: first match wins.
//!
//! The module also provides the inverse direction ([`encode_json`]) for the
//! record types an operator commonly hand-edits.

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use stellar_xdr::curr::{
    LedgerEntry, LedgerKey, Limits, ReadXdr, ScVal, SorobanAuthorizationEntry, TransactionEnvelope,
    TransactionMeta, TransactionResult, WriteXdr,
};
use thiserror::Error;
use tracing::debug;

use crate::soroban::error::DecodeError;

/// Nesting limit applied while parsing untrusted blobs
pub const MAX_DECODE_DEPTH: u32 = 500;

pub type XdrError = stellar_xdr::curr::Error;

/// A successfully parsed record, tagged by its XDR type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XdrRecord {
    TransactionEnvelope(Box<TransactionEnvelope>),
    TransactionResult(Box<TransactionResult>),
    TransactionMeta(Box<TransactionMeta>),
    ScVal(ScVal),
    LedgerEntry(Box<LedgerEntry>),
    SorobanAuthorizationEntry(Box<SorobanAuthorizationEntry>),
    LedgerKey(LedgerKey),
}

/// One known binary layout the decoder may try
#[derive(Clone, Copy)]
pub struct CandidateSchema {
    pub label: &'static str,
    pub parse: fn(&[u8]) -> Result<XdrRecord, XdrError>,
}

impl std::fmt::Debug for CandidateSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateSchema")
            .field("label", &self.label)
            .finish()
    }
}

/// Result of a blind decode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedRecord {
    pub label: &'static str,
    pub record: XdrRecord,
}

impl DecodedRecord {
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(&self.record)
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.record)
    }
}

/// Candidate schemas, most frequently pasted first.
pub const DEFAULT_SCHEMAS: &[CandidateSchema] = &[
    CandidateSchema {
        label: "Transaction Envelope",
        parse: parse_transaction_envelope,
    },
    CandidateSchema {
        label: "Transaction Result",
        parse: parse_transaction_result,
    },
    CandidateSchema {
        label: "Transaction Meta",
        parse: parse_transaction_meta,
    },
    CandidateSchema {
        label: "Soroban Value (ScVal)",
        parse: parse_scval,
    },
    CandidateSchema {
        label: "Ledger Entry",
        parse: parse_ledger_entry,
    },
    CandidateSchema {
        label: "Soroban Auth",
        parse: parse_soroban_auth,
    },
    CandidateSchema {
        label: "Ledger Key",
        parse: parse_ledger_key,
    },
];

/// Decode `blob` with the first schema in `schemas` that accepts it.
///
/// Individual parse errors are discarded; a blob no schema accepts is
/// reported as [`DecodeError::NoSchemaMatched`].
pub fn decode(blob: &str, schemas: &[CandidateSchema]) -> Result<DecodedRecord, DecodeError> {
    let bytes = general_purpose::STANDARD
        .decode(blob.trim())
        .map_err(|e| {
            debug!(error = %e, "Input is not valid base64");
            DecodeError::NoSchemaMatched
        })?;

    for schema in schemas {
        match (schema.parse)(&bytes) {
            Ok(record) => {
                debug!(schema = schema.label, len = bytes.len(), "Decoded XDR blob");
                return Ok(DecodedRecord {
                    label: schema.label,
                    record,
                });
            }
            Err(e) => {
                debug!(schema = schema.label, error = %e, "Schema did not match");
            }
        }
    }

    Err(DecodeError::NoSchemaMatched)
}

pub fn decode_default(blob: &str) -> Result<DecodedRecord, DecodeError> {
    decode(blob, DEFAULT_SCHEMAS)
}

fn read_all<T: ReadXdr>(bytes: &[u8]) -> Result<T, XdrError> {
    T::from_xdr(
        bytes,
        Limits {
            depth: MAX_DECODE_DEPTH,
            len: bytes.len(),
        },
    )
}

pub fn parse_transaction_envelope(bytes: &[u8]) -> Result<XdrRecord, XdrError> {
    read_all(bytes).map(|v| XdrRecord::TransactionEnvelope(Box::new(v)))
}

pub fn parse_transaction_result(bytes: &[u8]) -> Result<XdrRecord, XdrError> {
    read_all(bytes).map(|v| XdrRecord::TransactionResult(Box::new(v)))
}

pub fn parse_transaction_meta(bytes: &[u8]) -> Result<XdrRecord, XdrError> {
    read_all(bytes).map(|v| XdrRecord::TransactionMeta(Box::new(v)))
}

pub fn parse_scval(bytes: &[u8]) -> Result<XdrRecord, XdrError> {
    read_all(bytes).map(XdrRecord::ScVal)
}

pub fn parse_ledger_entry(bytes: &[u8]) -> Result<XdrRecord, XdrError> {
    read_all(bytes).map(|v| XdrRecord::LedgerEntry(Box::new(v)))
}

pub fn parse_soroban_auth(bytes: &[u8]) -> Result<XdrRecord, XdrError> {
    read_all(bytes).map(|v| XdrRecord::SorobanAuthorizationEntry(Box::new(v)))
}

pub fn parse_ledger_key(bytes: &[u8]) -> Result<XdrRecord, XdrError> {
    read_all(bytes).map(XdrRecord::LedgerKey)
}

/// XDR types that can be built from their JSON representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum XdrJsonType {
    TransactionEnvelope,
    ScVal,
    LedgerKey,
}

#[derive(Debug, Error)]
pub enum XdrJsonError {
    #[error("Encoding failed: invalid {kind:?} JSON: {source}")]
    InvalidJson {
        kind: XdrJsonType,
        #[source]
        source: serde_json::Error,
    },

    #[error("Encoding failed: {0}")]
    Xdr(#[from] XdrError),
}

/// Encode a JSON document as base64 XDR of the given type.
pub fn encode_json(json: &str, kind: XdrJsonType) -> Result<String, XdrJsonError> {
    let invalid = |source| XdrJsonError::InvalidJson { kind, source };

    let bytes = match kind {
        XdrJsonType::TransactionEnvelope => serde_json::from_str::<TransactionEnvelope>(json)
            .map_err(invalid)?
            .to_xdr(Limits::none())?,
        XdrJsonType::ScVal => serde_json::from_str::<ScVal>(json)
            .map_err(invalid)?
            .to_xdr(Limits::none())?,
        XdrJsonType::LedgerKey => serde_json::from_str::<LedgerKey>(json)
            .map_err(invalid)?
            .to_xdr(Limits::none())?,
    };

    Ok(general_purpose::STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArgKind, ContractIdentifier, DurabilityClass};
    use crate::soroban::ledger_key::derive_storage_key_bytes;
    use crate::soroban::scval::encode;

    fn b64(val: &impl WriteXdr) -> String {
        general_purpose::STANDARD.encode(val.to_xdr(Limits::none()).unwrap())
    }

    fn always_void(_: &[u8]) -> Result<XdrRecord, XdrError> {
        Ok(XdrRecord::ScVal(ScVal::Void))
    }

    fn always_true(_: &[u8]) -> Result<XdrRecord, XdrError> {
        Ok(XdrRecord::ScVal(ScVal::Bool(true)))
    }

    fn never(_: &[u8]) -> Result<XdrRecord, XdrError> {
        Err(XdrError::Invalid)
    }

    #[test]
    fn test_i32_round_trip_through_scval_schema() {
        let blob = b64(&encode(ArgKind::I32, "42").unwrap());

        let schemas = [CandidateSchema {
            label: "Soroban Value (ScVal)",
            parse: parse_scval,
        }];
        let decoded = decode(&blob, &schemas).unwrap();

        assert_eq!(decoded.record, XdrRecord::ScVal(ScVal::I32(42)));
    }

    #[test]
    fn test_scval_is_detected_by_default_schemas() {
        let blob = b64(&encode(ArgKind::I32, "42").unwrap());

        let decoded = decode_default(&blob).unwrap();

        assert_eq!(decoded.label, "Soroban Value (ScVal)");
        assert_eq!(decoded.record, XdrRecord::ScVal(ScVal::I32(42)));
    }

    #[test]
    fn test_first_match_wins() {
        let blob = b64(&ScVal::U32(1));

        let schemas = [
            CandidateSchema {
                label: "rejects",
                parse: never,
            },
            CandidateSchema {
                label: "first",
                parse: always_void,
            },
            CandidateSchema {
                label: "second",
                parse: always_true,
            },
        ];
        let decoded = decode(&blob, &schemas).unwrap();
        assert_eq!(decoded.label, "first");
        assert_eq!(decoded.record, XdrRecord::ScVal(ScVal::Void));

        let decoded = decode(&blob, &schemas[2..]).unwrap();
        assert_eq!(decoded.label, "second");
    }

    #[test]
    fn test_no_schema_matched() {
        // three zero bytes cannot be a whole XDR value of any type
        assert_eq!(decode_default("AAAA"), Err(DecodeError::NoSchemaMatched));
        assert_eq!(
            decode_default("definitely not base64!"),
            Err(DecodeError::NoSchemaMatched)
        );
        assert_eq!(decode_default(""), Err(DecodeError::NoSchemaMatched));

        let schemas = [CandidateSchema {
            label: "rejects",
            parse: never,
        }];
        assert_eq!(
            decode(&b64(&ScVal::Void), &schemas),
            Err(DecodeError::NoSchemaMatched)
        );
        assert_eq!(decode(&b64(&ScVal::Void), &[]), Err(DecodeError::NoSchemaMatched));
    }

    #[test]
    fn test_trailing_bytes_are_rejected() {
        let mut bytes = ScVal::I32(42).to_xdr(Limits::none()).unwrap();
        bytes.extend_from_slice(&[0, 0, 0, 0]);

        assert!(parse_scval(&bytes).is_err());
    }

    #[test]
    fn test_derived_storage_key_is_decodable() {
        let contract = ContractIdentifier::from_bytes([5u8; 32]);
        let key = encode(ArgKind::Symbol, "Admin").unwrap();
        let bytes = derive_storage_key_bytes(&contract, key, DurabilityClass::Persistent).unwrap();

        let schemas = [CandidateSchema {
            label: "Ledger Key",
            parse: parse_ledger_key,
        }];
        let decoded = decode(&bytes.to_base64(), &schemas).unwrap();
        assert!(matches!(decoded.record, XdrRecord::LedgerKey(LedgerKey::ContractData(_))));
    }

    #[test]
    fn test_decoded_record_renders_json() {
        let blob = b64(&ScVal::Bool(true));
        let decoded = decode_default(&blob).unwrap();

        let json = decoded.to_json().unwrap();
        assert!(!json.is_null());
        assert!(decoded.to_pretty_json().unwrap().contains("true"));
    }

    #[test]
    fn test_encode_json_round_trips_through_decoder() {
        let original = encode(ArgKind::Map, r#"{"b":1,"a":[true]}"#).unwrap();
        let json = serde_json::to_string(&original).unwrap();

        let blob = encode_json(&json, XdrJsonType::ScVal).unwrap();
        assert_eq!(blob, b64(&original));
    }

    #[test]
    fn test_encode_json_rejects_invalid_input() {
        assert!(matches!(
            encode_json("{not json", XdrJsonType::LedgerKey),
            Err(XdrJsonError::InvalidJson {
                kind: XdrJsonType::LedgerKey,
                ..
            })
        ));
        assert!(encode_json(r#"{"unknown_variant": 1}"#, XdrJsonType::ScVal).is_err());
    }
}
