//! Ledger key derivation for contract storage lookups

use sha2::{Digest, Sha256};
use stellar_xdr::curr::{
    ContractDataDurability, Hash, LedgerKey, LedgerKeyContractCode, LedgerKeyContractData, Limits,
    ScVal, WriteXdr,
};

use crate::models::{ContractIdentifier, DurabilityClass, StorageKeyBytes};

/// Build the `LedgerKey` addressing one contract-data entry.
pub fn derive_storage_key(
    contract: &ContractIdentifier,
    key: ScVal,
    durability: DurabilityClass,
) -> LedgerKey {
    LedgerKey::ContractData(LedgerKeyContractData {
        contract: contract.to_sc_address(),
        key,
        durability: durability.into(),
    })
}

/// Same as [`derive_storage_key`], serialized to canonical XDR.
pub fn derive_storage_key_bytes(
    contract: &ContractIdentifier,
    key: ScVal,
    durability: DurabilityClass,
) -> Result<StorageKeyBytes, stellar_xdr::curr::Error> {
    to_key_bytes(&derive_storage_key(contract, key, durability))
}

/// Key of the contract instance entry (executable + instance storage).
pub fn contract_instance_key(contract: &ContractIdentifier) -> LedgerKey {
    LedgerKey::ContractData(LedgerKeyContractData {
        contract: contract.to_sc_address(),
        key: ScVal::LedgerKeyContractInstance,
        durability: ContractDataDurability::Persistent,
    })
}

/// Key of an uploaded WASM blob.
pub fn contract_code_key(wasm_hash: [u8; 32]) -> LedgerKey {
    LedgerKey::ContractCode(LedgerKeyContractCode {
        hash: Hash(wasm_hash),
    })
}

/// SHA-256 of the module bytes, which is the hash the code entry is stored under
pub fn wasm_hash(module_bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(module_bytes).into()
}

/// Serialize any ledger key.
///
/// Writing into an in-memory buffer without limits only fails if an XDR
/// length bound is exceeded, which typed values built by this crate cannot do.
pub fn to_key_bytes(key: &LedgerKey) -> Result<StorageKeyBytes, stellar_xdr::curr::Error> {
    key.to_xdr(Limits::none()).map(StorageKeyBytes::new)
}
