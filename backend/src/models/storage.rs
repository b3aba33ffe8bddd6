use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stellar_xdr::curr::{ContractDataDurability, ContractId, Hash, ScAddress};

use crate::soroban::error::EncodeError;

/// Storage partition a contract-data key addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurabilityClass {
    Temporary,
    #[default]
    Persistent,
}

impl From<DurabilityClass> for ContractDataDurability {
    fn from(value: DurabilityClass) -> Self {
        match value {
            DurabilityClass::Temporary => ContractDataDurability::Temporary,
            DurabilityClass::Persistent => ContractDataDurability::Persistent,
        }
    }
}

impl fmt::Display for DurabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurabilityClass::Temporary => write!(f, "temporary"),
            DurabilityClass::Persistent => write!(f, "persistent"),
        }
    }
}

/// 32-byte hash of a deployed contract, validated from its `C...` strkey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractIdentifier([u8; 32]);

impl ContractIdentifier {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn from_strkey(raw: &str) -> Result<Self, EncodeError> {
        stellar_strkey::Contract::from_string(raw.trim())
            .map(|contract| Self(contract.0))
            .map_err(|_| EncodeError::InvalidAddress {
                raw: raw.to_string(),
            })
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_sc_address(&self) -> ScAddress {
        ScAddress::Contract(ContractId(Hash(self.0)))
    }
}

impl FromStr for ContractIdentifier {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_strkey(s)
    }
}

impl fmt::Display for ContractIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", stellar_strkey::Contract(self.0))
    }
}

/// Canonical XDR bytes of a ledger key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKeyBytes(Vec<u8>);

impl StorageKeyBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.0)
    }
}

impl AsRef<[u8]> for StorageKeyBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
