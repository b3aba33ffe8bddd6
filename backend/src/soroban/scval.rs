//! Typed argument → `ScVal` encoder
//!
//! Converts the loosely-typed values an operator types into a call form into
//! the canonical `ScVal` used for contract invocation and storage keys.
//!
//! Scalar kinds are validated strictly against their declared type. `vec` and
//! `map` arguments carry JSON text whose elements are *inferred* from their own
//! JSON shape (see [`infer_scval`]); heterogeneous vectors are accepted.

use serde_json::Value;
use std::str::FromStr;
use stellar_strkey::Strkey;
use stellar_xdr::curr::{
    AccountId, ContractId, Hash, Int128Parts, PublicKey, ScAddress, ScMap, ScMapEntry, ScString,
    ScSymbol, ScVal, ScVec, UInt128Parts, Uint256,
};

use crate::models::{ArgKind, TypedArgument};
use crate::soroban::error::EncodeError;

/// Longest symbol the protocol accepts
pub const MAX_SYMBOL_LEN: usize = 32;

/// Encode one raw form value as the declared kind.
pub fn encode(kind: ArgKind, raw: &str) -> Result<ScVal, EncodeError> {
    match kind {
        ArgKind::Bool => encode_bool(raw),
        ArgKind::I32 => parse_integer::<i32>(kind, raw).map(ScVal::I32),
        ArgKind::U32 => parse_integer::<u32>(kind, raw).map(ScVal::U32),
        ArgKind::I128 => parse_integer::<i128>(kind, raw).map(|v| ScVal::I128(i128_parts(v))),
        ArgKind::U128 => parse_integer::<u128>(kind, raw).map(|v| ScVal::U128(u128_parts(v))),
        ArgKind::Symbol => encode_symbol(raw),
        ArgKind::String => encode_string(kind, raw),
        ArgKind::Address => encode_address(raw),
        ArgKind::Vec => encode_vec(raw),
        ArgKind::Map => encode_map(raw),
    }
}

pub fn encode_argument(arg: &TypedArgument) -> Result<ScVal, EncodeError> {
    encode(arg.kind, &arg.raw)
}

/// Encode a whole argument list, stopping at the first invalid field.
pub fn encode_arguments(args: &[TypedArgument]) -> Result<Vec<ScVal>, EncodeError> {
    args.iter().map(encode_argument).collect()
}

/// Checks the restricted symbol alphabet: `[A-Za-z0-9_]`, at most 32 chars.
pub fn validate_symbol(raw: &str) -> Result<(), String> {
    if raw.len() > MAX_SYMBOL_LEN {
        return Err(format!(
            "symbols are limited to {} characters, got {}",
            MAX_SYMBOL_LEN,
            raw.len()
        ));
    }
    if let Some(c) = raw
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(format!("character '{}' is not allowed (use a-z, A-Z, 0-9, _)", c));
    }
    Ok(())
}

/// Infer an `ScVal` from a JSON literal's own shape.
///
/// - `null` → `Void`
/// - `bool` → `Bool`
/// - integers → `U64` when non-negative, `I64` otherwise
/// - strings → `String`
/// - arrays → `Vec`, objects → `Map` (recursively)
///
/// Fractional numbers have no `ScVal` counterpart and are rejected; whole
/// numbers wider than 64 bits are out of range.
pub fn infer_scval(kind: ArgKind, value: &Value) -> Result<ScVal, EncodeError> {
    match value {
        Value::Null => Ok(ScVal::Void),
        Value::Bool(b) => Ok(ScVal::Bool(*b)),
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                Ok(ScVal::U64(v))
            } else if let Some(v) = n.as_i64() {
                Ok(ScVal::I64(v))
            } else if n.as_f64().is_some_and(is_wide_integer) {
                // Whole numbers past 64 bits arrive as floats
                Err(EncodeError::OutOfRange {
                    kind,
                    raw: n.to_string(),
                })
            } else {
                Err(EncodeError::MalformedComposite {
                    kind,
                    reason: format!("number {} is not an integer", n),
                })
            }
        }
        Value::String(s) => encode_string(kind, s),
        Value::Array(items) => {
            let elements = items
                .iter()
                .map(|item| infer_scval(kind, item))
                .collect::<Result<Vec<_>, _>>()?;
            sc_vec(kind, elements)
        }
        Value::Object(entries) => {
            let entries = entries
                .iter()
                .map(|(key, val)| {
                    Ok(ScMapEntry {
                        key: map_key(kind, key)?,
                        val: infer_scval(kind, val)?,
                    })
                })
                .collect::<Result<Vec<_>, EncodeError>>()?;
            sc_map(kind, entries)
        }
    }
}

fn is_wide_integer(v: f64) -> bool {
    v.fract() == 0.0 && (v >= u64::MAX as f64 || v < i64::MIN as f64)
}

fn encode_bool(raw: &str) -> Result<ScVal, EncodeError> {
    match raw {
        "true" => Ok(ScVal::Bool(true)),
        "false" => Ok(ScVal::Bool(false)),
        _ => Err(EncodeError::InvalidBoolean {
            raw: raw.to_string(),
        }),
    }
}

fn parse_integer<T: FromStr>(kind: ArgKind, raw: &str) -> Result<T, EncodeError> {
    let literal = raw.trim();
    if !is_integer_literal(literal) {
        return Err(EncodeError::NotANumber {
            kind,
            raw: raw.to_string(),
        });
    }
    // "-0" is zero for unsigned kinds too
    let literal = match literal.strip_prefix('-') {
        Some(digits) if digits.bytes().all(|b| b == b'0') => digits,
        _ => literal,
    };
    // The literal is well formed, so a parse failure can only be overflow
    // (or a sign the target type cannot represent).
    literal.parse::<T>().map_err(|_| EncodeError::OutOfRange {
        kind,
        raw: raw.to_string(),
    })
}

fn is_integer_literal(literal: &str) -> bool {
    let digits = literal
        .strip_prefix('-')
        .or_else(|| literal.strip_prefix('+'))
        .unwrap_or(literal);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn i128_parts(value: i128) -> Int128Parts {
    Int128Parts {
        hi: (value >> 64) as i64,
        lo: value as u64,
    }
}

fn u128_parts(value: u128) -> UInt128Parts {
    UInt128Parts {
        hi: (value >> 64) as u64,
        lo: value as u64,
    }
}

fn encode_symbol(raw: &str) -> Result<ScVal, EncodeError> {
    validate_symbol(raw).map_err(|reason| EncodeError::InvalidSymbol {
        raw: raw.to_string(),
        reason,
    })?;
    let symbol = raw
        .to_string()
        .try_into()
        .map_err(|_| EncodeError::InvalidSymbol {
            raw: raw.to_string(),
            reason: "rejected by the XDR symbol type".to_string(),
        })?;
    Ok(ScVal::Symbol(ScSymbol(symbol)))
}

fn encode_string(kind: ArgKind, raw: &str) -> Result<ScVal, EncodeError> {
    let string = raw
        .to_string()
        .try_into()
        .map_err(|_| EncodeError::OutOfRange {
            kind,
            raw: format!("<{} byte string>", raw.len()),
        })?;
    Ok(ScVal::String(ScString(string)))
}

fn encode_address(raw: &str) -> Result<ScVal, EncodeError> {
    let address = match Strkey::from_string(raw.trim()) {
        Ok(Strkey::PublicKeyEd25519(key)) => ScAddress::Account(AccountId(
            PublicKey::PublicKeyTypeEd25519(Uint256(key.0)),
        )),
        Ok(Strkey::Contract(contract)) => ScAddress::Contract(ContractId(Hash(contract.0))),
        _ => {
            return Err(EncodeError::InvalidAddress {
                raw: raw.to_string(),
            })
        }
    };
    Ok(ScVal::Address(address))
}

fn encode_vec(raw: &str) -> Result<ScVal, EncodeError> {
    match parse_json(ArgKind::Vec, raw)? {
        value @ Value::Array(_) => infer_scval(ArgKind::Vec, &value),
        other => Err(EncodeError::MalformedComposite {
            kind: ArgKind::Vec,
            reason: format!("expected a JSON array, got {}", json_shape(&other)),
        }),
    }
}

fn encode_map(raw: &str) -> Result<ScVal, EncodeError> {
    match parse_json(ArgKind::Map, raw)? {
        value @ Value::Object(_) => infer_scval(ArgKind::Map, &value),
        other => Err(EncodeError::MalformedComposite {
            kind: ArgKind::Map,
            reason: format!("expected a JSON object, got {}", json_shape(&other)),
        }),
    }
}

fn parse_json(kind: ArgKind, raw: &str) -> Result<Value, EncodeError> {
    serde_json::from_str(raw).map_err(|e| EncodeError::MalformedComposite {
        kind,
        reason: format!("invalid JSON: {}", e),
    })
}

/// Object keys become symbols when they fit the symbol alphabet.
fn map_key(kind: ArgKind, key: &str) -> Result<ScVal, EncodeError> {
    if validate_symbol(key).is_ok() {
        encode_symbol(key)
    } else {
        encode_string(kind, key)
    }
}

fn sc_vec(kind: ArgKind, elements: Vec<ScVal>) -> Result<ScVal, EncodeError> {
    let elements = elements
        .try_into()
        .map_err(|_| EncodeError::MalformedComposite {
            kind,
            reason: "too many vector elements".to_string(),
        })?;
    Ok(ScVal::Vec(Some(ScVec(elements))))
}

fn sc_map(kind: ArgKind, entries: Vec<ScMapEntry>) -> Result<ScVal, EncodeError> {
    let entries = entries
        .try_into()
        .map_err(|_| EncodeError::MalformedComposite {
            kind,
            reason: "too many map entries".to_string(),
        })?;
    Ok(ScVal::Map(Some(ScMap(entries))))
}

fn json_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
