//! Soroban RPC Service
//!
//! Read-only access to Soroban ledger state over JSON-RPC.
//!
//! # Features
//! - Network presets (mainnet/testnet/futurenet/local) and custom endpoints
//! - Contract storage reads via derived ledger keys (`getLedgerEntries`)
//! - Contract WASM resolution (instance entry → wasm hash → code entry)
//! - Function discovery by mining the contract spec section
//! - Network health probing (`getLatestLedger`)
//! - Account transaction history from Horizon

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use stellar_xdr::curr::{
    ContractExecutable, LedgerEntryData, LedgerKey, Limits, ReadXdr, ScVal,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{
    ContractIdentifier, DurabilityClass, HistoryRecord, HorizonTransaction, StorageKeyBytes,
    HISTORY_LIMIT,
};
use crate::soroban::ledger_key::{
    contract_code_key, contract_instance_key, derive_storage_key, to_key_bytes,
};
use crate::soroban::rpc_errors::describe_rpc_error;
use crate::soroban::wasm_spec::SpecMiner;

/// Latency above which a reachable RPC node is reported as degraded
pub const DEGRADED_LATENCY_MS: u64 = 1000;

/// Network configuration for Soroban
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Short network name (e.g., "testnet")
    pub name: String,
    /// RPC endpoint URL (e.g., "https://soroban-testnet.stellar.org")
    pub rpc_url: String,
    /// Network passphrase (e.g., "Test SDF Network ; September 2015")
    pub network_passphrase: String,
    /// Horizon endpoint used for account history
    pub horizon_url: String,
}

impl NetworkConfig {
    /// Create a testnet configuration
    pub fn testnet() -> Self {
        Self {
            name: "testnet".to_string(),
            rpc_url: "https://soroban-testnet.stellar.org".to_string(),
            network_passphrase: "Test SDF Network ; September 2015".to_string(),
            horizon_url: "https://horizon-testnet.stellar.org".to_string(),
        }
    }

    /// Create a mainnet configuration
    pub fn mainnet() -> Self {
        Self {
            name: "mainnet".to_string(),
            rpc_url: "https://soroban-rpc.mainnet.stellar.org".to_string(),
            network_passphrase: "Public Global Stellar Network ; September 2015".to_string(),
            horizon_url: "https://horizon.stellar.org".to_string(),
        }
    }

    pub fn futurenet() -> Self {
        Self {
            name: "futurenet".to_string(),
            rpc_url: "https://rpc-futurenet.stellar.org".to_string(),
            network_passphrase: "Test SDF Future Network ; October 2022".to_string(),
            horizon_url: "https://horizon-futurenet.stellar.org".to_string(),
        }
    }

    /// Standalone quickstart node
    pub fn local() -> Self {
        Self {
            name: "local".to_string(),
            rpc_url: "http://localhost:8000/soroban/rpc".to_string(),
            network_passphrase: "Standalone Network ; February 2017".to_string(),
            horizon_url: "http://localhost:8000".to_string(),
        }
    }

    /// Create a custom network configuration; Horizon is assumed to sit
    /// next to the RPC node (first "rpc" in the URL replaced by "horizon").
    pub fn custom(rpc_url: String, network_passphrase: String) -> Self {
        Self {
            name: "custom".to_string(),
            horizon_url: rpc_url.replacen("rpc", "horizon", 1),
            rpc_url,
            network_passphrase,
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" => Some(Self::mainnet()),
            "testnet" => Some(Self::testnet()),
            "futurenet" => Some(Self::futurenet()),
            "local" | "standalone" => Some(Self::local()),
            _ => None,
        }
    }
}

/// One ledger entry returned by `getLedgerEntries`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntryResult {
    pub key: String,
    pub data: LedgerEntryData,
    pub last_modified_ledger: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_until_ledger: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Offline,
}

/// Snapshot of RPC node health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkHealth {
    pub status: HealthStatus,
    pub latest_ledger: u32,
    pub protocol_version: u32,
    pub latency_ms: u64,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Soroban service for ledger state queries
#[derive(Clone)]
pub struct SorobanService {
    network: NetworkConfig,
    client: reqwest::Client,
}

#[derive(Debug, Error)]
pub enum SorobanError {
    #[error("RPC request failed: {0}")]
    RpcError(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("XDR error: {0}")]
    XdrError(#[from] stellar_xdr::curr::Error),
    #[error("Ledger entry not found: {0}")]
    NotFound(String),
    #[error("Contract {0} is not backed by WASM (Stellar Asset Contract)")]
    NoWasmExecutable(String),
    #[error("Invalid account address: {0}")]
    InvalidAccount(String),
}

impl SorobanError {
    /// Message suitable for showing to an operator
    pub fn user_message(&self) -> String {
        describe_rpc_error(&self.to_string())
    }
}

/// RPC request/response types
#[derive(Debug, Serialize)]
struct RpcRequest {
    jsonrpc: String,
    id: u64,
    method: String,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)] // Fields used for deserialization from RPC response
struct RpcResponse {
    jsonrpc: String,
    id: u64,
    #[serde(flatten)]
    result: RpcResult,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RpcResult {
    Success {
        result: serde_json::Value,
    },
    Error {
        error: RpcError,
    },
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)] // Fields used for deserialization from RPC response
struct RpcError {
    code: i32,
    message: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)] // Fields used for deserialization from RPC response
struct GetLedgerEntriesResponse {
    #[serde(rename = "entries", default)]
    entries: Option<Vec<RawLedgerEntry>>,
    #[serde(rename = "latestLedger")]
    latest_ledger: u64,
}

#[derive(Debug, Deserialize)]
struct RawLedgerEntry {
    #[serde(rename = "key")]
    key: String,
    #[serde(rename = "xdr")]
    xdr: String,
    #[serde(rename = "lastModifiedLedgerSeq")]
    last_modified_ledger_seq: u32,
    #[serde(rename = "liveUntilLedgerSeq", default)]
    live_until_ledger_seq: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)] // Fields used for deserialization from RPC response
struct GetLatestLedgerResponse {
    #[serde(rename = "id")]
    id: String,
    #[serde(rename = "protocolVersion")]
    protocol_version: u32,
    #[serde(rename = "sequence")]
    sequence: u32,
}

impl SorobanService {
    /// Create a new Soroban service instance
    pub fn new(network: NetworkConfig) -> Self {
        Self {
            network,
            client: reqwest::Client::new(),
        }
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// Fetch ledger entries for already-serialized keys.
    ///
    /// Keys without a live entry are simply absent from the result.
    pub async fn get_ledger_entries(
        &self,
        keys: &[StorageKeyBytes],
    ) -> Result<Vec<LedgerEntryResult>, SorobanError> {
        let encoded: Vec<String> = keys.iter().map(StorageKeyBytes::to_base64).collect();
        debug!(count = encoded.len(), "Fetching ledger entries");

        let params = serde_json::json!({
            "keys": encoded
        });

        let response: GetLedgerEntriesResponse =
            self.rpc_call("getLedgerEntries", params).await?;

        decode_ledger_entries(response)
    }

    async fn get_ledger_entry(
        &self,
        key: &LedgerKey,
    ) -> Result<Option<LedgerEntryResult>, SorobanError> {
        let bytes = to_key_bytes(key)?;
        let mut entries = self.get_ledger_entries(&[bytes]).await?;
        Ok(entries.pop())
    }

    /// Read one contract-data entry
    pub async fn read_contract_data(
        &self,
        contract: &ContractIdentifier,
        key: ScVal,
        durability: DurabilityClass,
    ) -> Result<Option<LedgerEntryResult>, SorobanError> {
        info!(
            contract_id = %contract,
            durability = %durability,
            "Reading contract storage"
        );

        self.get_ledger_entry(&derive_storage_key(contract, key, durability))
            .await
    }

    /// Resolve the WASM bytes a contract instance executes
    pub async fn fetch_contract_wasm(
        &self,
        contract: &ContractIdentifier,
    ) -> Result<Vec<u8>, SorobanError> {
        info!(contract_id = %contract, "Fetching contract WASM");

        let instance = self
            .get_ledger_entry(&contract_instance_key(contract))
            .await?
            .ok_or_else(|| SorobanError::NotFound(format!("contract instance {}", contract)))?;

        let hash = wasm_hash_from_instance(contract, &instance.data)?;
        debug!(contract_id = %contract, wasm_hash = %hex::encode(hash), "Resolved wasm hash");

        let code = self
            .get_ledger_entry(&contract_code_key(hash))
            .await?
            .ok_or_else(|| SorobanError::NotFound(format!("contract code {}", hex::encode(hash))))?;

        wasm_from_code_entry(code.data)
    }

    /// Probable public function names of a deployed contract
    pub async fn contract_functions(
        &self,
        contract: &ContractIdentifier,
        miner: &SpecMiner,
    ) -> Result<Vec<String>, SorobanError> {
        let wasm = self.fetch_contract_wasm(contract).await?;
        Ok(miner.mine(&wasm))
    }

    /// Probe the RPC node; an unreachable node is reported as offline.
    pub async fn network_health(&self) -> NetworkHealth {
        let start = Instant::now();
        let result: Result<GetLatestLedgerResponse, SorobanError> = self
            .rpc_call("getLatestLedger", serde_json::json!({}))
            .await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(ledger) => NetworkHealth {
                status: health_status(latency_ms),
                latest_ledger: ledger.sequence,
                protocol_version: ledger.protocol_version,
                latency_ms,
                checked_at: chrono::Utc::now(),
            },
            Err(e) => {
                warn!(rpc_url = %self.network.rpc_url, error = %e, "RPC health check failed");
                NetworkHealth {
                    status: HealthStatus::Offline,
                    latest_ledger: 0,
                    protocol_version: 0,
                    latency_ms: 0,
                    checked_at: chrono::Utc::now(),
                }
            }
        }
    }

    /// Most recent transactions of an account, newest first
    pub async fn fetch_account_history(
        &self,
        account: &str,
    ) -> Result<Vec<HistoryRecord>, SorobanError> {
        let account = account.trim();
        stellar_strkey::ed25519::PublicKey::from_string(account)
            .map_err(|_| SorobanError::InvalidAccount(account.to_string()))?;

        info!(account = %account, "Fetching account history");

        let url = format!(
            "{}/accounts/{}/transactions",
            self.network.horizon_url.trim_end_matches('/'),
            account
        );
        let limit = HISTORY_LIMIT.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit.as_str()), ("order", "desc")])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SorobanError::NotFound(format!("account {}", account)));
        }
        if !status.is_success() {
            return Err(SorobanError::RpcError(format!(
                "Horizon HTTP {}: {}",
                status, text
            )));
        }

        let records = parse_history_response(&text)?;
        debug!(account = %account, count = records.len(), "Fetched account history");
        Ok(records)
    }

    /// Make an RPC call to the Soroban RPC endpoint
    async fn rpc_call<T>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, SorobanError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = RpcRequest {
            jsonrpc: "2.0".to_string(),
            id: 1,
            method: method.to_string(),
            params,
        };

        let response = self
            .client
            .post(&self.network.rpc_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(SorobanError::RpcError(format!(
                "HTTP {}: {}",
                status, text
            )));
        }

        parse_rpc_response(&text)
    }
}

fn parse_rpc_response<T>(text: &str) -> Result<T, SorobanError>
where
    T: for<'de> Deserialize<'de>,
{
    let rpc_response: RpcResponse = serde_json::from_str(text)?;

    match rpc_response.result {
        RpcResult::Success { result } => {
            serde_json::from_value(result).map_err(SorobanError::SerializationError)
        }
        RpcResult::Error { error } => Err(SorobanError::RpcError(format!(
            "RPC error {}: {}",
            error.code, error.message
        ))),
    }
}

#[derive(Debug, Deserialize)]
struct HorizonPage {
    #[serde(rename = "_embedded")]
    embedded: HorizonEmbedded,
}

#[derive(Debug, Deserialize)]
struct HorizonEmbedded {
    #[serde(default)]
    records: Vec<HorizonTransaction>,
}

fn parse_history_response(text: &str) -> Result<Vec<HistoryRecord>, SorobanError> {
    let page: HorizonPage = serde_json::from_str(text)?;
    Ok(page
        .embedded
        .records
        .into_iter()
        .map(HistoryRecord::from)
        .collect())
}

fn decode_ledger_entries(
    response: GetLedgerEntriesResponse,
) -> Result<Vec<LedgerEntryResult>, SorobanError> {
    response
        .entries
        .unwrap_or_default()
        .into_iter()
        .map(|raw| -> Result<LedgerEntryResult, SorobanError> {
            let bytes = general_purpose::STANDARD
                .decode(&raw.xdr)
                .map_err(|e| SorobanError::InvalidResponse(format!("entry xdr: {}", e)))?;
            let data = LedgerEntryData::from_xdr(bytes, Limits::none())?;
            Ok(LedgerEntryResult {
                key: raw.key,
                data,
                last_modified_ledger: raw.last_modified_ledger_seq,
                live_until_ledger: raw.live_until_ledger_seq,
            })
        })
        .collect()
}

fn wasm_hash_from_instance(
    contract: &ContractIdentifier,
    data: &LedgerEntryData,
) -> Result<[u8; 32], SorobanError> {
    let LedgerEntryData::ContractData(entry) = data else {
        return Err(SorobanError::InvalidResponse(
            "instance key did not return contract data".to_string(),
        ));
    };
    let ScVal::ContractInstance(instance) = &entry.val else {
        return Err(SorobanError::InvalidResponse(
            "instance entry does not hold a contract instance".to_string(),
        ));
    };

    match &instance.executable {
        ContractExecutable::Wasm(hash) => Ok(hash.0),
        ContractExecutable::StellarAsset => {
            Err(SorobanError::NoWasmExecutable(contract.to_string()))
        }
    }
}

fn wasm_from_code_entry(data: LedgerEntryData) -> Result<Vec<u8>, SorobanError> {
    match data {
        LedgerEntryData::ContractCode(entry) => Ok(entry.code.to_vec()),
        _ => Err(SorobanError::InvalidResponse(
            "code key did not return contract code".to_string(),
        )),
    }
}

fn health_status(latency_ms: u64) -> HealthStatus {
    if latency_ms > DEGRADED_LATENCY_MS {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OperationSummary, TransactionStatus};
    use stellar_xdr::curr::{
        ContractCodeEntry, ContractCodeEntryExt, ContractDataDurability, ContractDataEntry,
        ExtensionPoint, Hash, ScContractInstance, WriteXdr,
    };

    fn contract() -> ContractIdentifier {
        ContractIdentifier::from_bytes([1u8; 32])
    }

    fn instance_data(executable: ContractExecutable) -> LedgerEntryData {
        LedgerEntryData::ContractData(ContractDataEntry {
            ext: ExtensionPoint::V0,
            contract: contract().to_sc_address(),
            key: ScVal::LedgerKeyContractInstance,
            durability: ContractDataDurability::Persistent,
            val: ScVal::ContractInstance(ScContractInstance {
                executable,
                storage: None,
            }),
        })
    }

    fn code_data(code: &[u8]) -> LedgerEntryData {
        LedgerEntryData::ContractCode(ContractCodeEntry {
            ext: ContractCodeEntryExt::V0,
            hash: Hash([2u8; 32]),
            code: code.to_vec().try_into().unwrap(),
        })
    }

    fn b64(data: &LedgerEntryData) -> String {
        general_purpose::STANDARD.encode(data.to_xdr(Limits::none()).unwrap())
    }

    #[test]
    fn test_network_presets() {
        let testnet = NetworkConfig::testnet();
        assert!(testnet.rpc_url.contains("testnet"));

        let mainnet = NetworkConfig::mainnet();
        assert!(mainnet.rpc_url.contains("mainnet"));
        assert_eq!(
            mainnet.network_passphrase,
            "Public Global Stellar Network ; September 2015"
        );

        assert_eq!(NetworkConfig::preset("FUTURENET"), Some(NetworkConfig::futurenet()));
        assert_eq!(NetworkConfig::preset("standalone"), Some(NetworkConfig::local()));
        assert_eq!(NetworkConfig::preset("moon"), None);
    }

    #[test]
    fn test_network_config_custom() {
        let custom = NetworkConfig::custom(
            "https://custom-rpc.example.com".to_string(),
            "Custom Network".to_string(),
        );
        assert_eq!(custom.name, "custom");
        assert_eq!(custom.rpc_url, "https://custom-rpc.example.com");
        assert_eq!(custom.network_passphrase, "Custom Network");
        assert_eq!(custom.horizon_url, "https://custom-horizon.example.com");
    }

    #[test]
    fn test_parse_history_response() {
        let records = parse_history_response(
            r#"{
                "_links": {},
                "_embedded": {
                    "records": [
                        {"created_at":"2024-05-02T00:00:00Z","hash":"new","operation_count":2,"fee_charged":"300","successful":true},
                        {"created_at":"2024-05-01T00:00:00Z","hash":"old","operation_count":1,"fee_charged":"100","successful":false}
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].hash, "new");
        assert_eq!(records[0].op_type, OperationSummary::MultiOp);
        assert_eq!(records[0].fee_paid, 300);
        assert_eq!(records[1].result, TransactionStatus::Failed);

        let empty = parse_history_response(r#"{"_embedded":{"records":[]}}"#).unwrap();
        assert!(empty.is_empty());

        assert!(matches!(
            parse_history_response(r#"{"status":404}"#),
            Err(SorobanError::SerializationError(_))
        ));
    }

    #[test]
    fn test_parse_rpc_success_and_error() {
        let ok: GetLatestLedgerResponse = parse_rpc_response(
            r#"{"jsonrpc":"2.0","id":1,"result":{"id":"abc","protocolVersion":23,"sequence":42}}"#,
        )
        .unwrap();
        assert_eq!(ok.sequence, 42);
        assert_eq!(ok.protocol_version, 23);

        let err = parse_rpc_response::<GetLatestLedgerResponse>(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"invalid params"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SorobanError::RpcError(ref m) if m.contains("-32602")));
    }

    #[test]
    fn test_decode_ledger_entries() {
        let data = code_data(b"\0asm\x01\0\0\0");
        let json = serde_json::json!({
            "entries": [{
                "key": "AAAABw==",
                "xdr": b64(&data),
                "lastModifiedLedgerSeq": 100,
                "liveUntilLedgerSeq": 200
            }],
            "latestLedger": 150
        });
        let response: GetLedgerEntriesResponse = serde_json::from_value(json).unwrap();

        let entries = decode_ledger_entries(response).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].data, data);
        assert_eq!(entries[0].last_modified_ledger, 100);
        assert_eq!(entries[0].live_until_ledger, Some(200));
    }

    #[test]
    fn test_decode_ledger_entries_handles_missing_and_bad_entries() {
        let response: GetLedgerEntriesResponse =
            serde_json::from_str(r#"{"latestLedger":1}"#).unwrap();
        assert!(decode_ledger_entries(response).unwrap().is_empty());

        let response: GetLedgerEntriesResponse = serde_json::from_str(
            r#"{"entries":[{"key":"k","xdr":"AAAA","lastModifiedLedgerSeq":1}],"latestLedger":1}"#,
        )
        .unwrap();
        assert!(matches!(
            decode_ledger_entries(response),
            Err(SorobanError::XdrError(_))
        ));
    }

    #[test]
    fn test_wasm_hash_from_instance() {
        let data = instance_data(ContractExecutable::Wasm(Hash([7u8; 32])));
        assert_eq!(wasm_hash_from_instance(&contract(), &data).unwrap(), [7u8; 32]);

        let sac = instance_data(ContractExecutable::StellarAsset);
        assert!(matches!(
            wasm_hash_from_instance(&contract(), &sac),
            Err(SorobanError::NoWasmExecutable(_))
        ));

        assert!(matches!(
            wasm_hash_from_instance(&contract(), &code_data(b"")),
            Err(SorobanError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_wasm_from_code_entry() {
        assert_eq!(
            wasm_from_code_entry(code_data(b"\0asm")).unwrap(),
            b"\0asm".to_vec()
        );
        assert!(wasm_from_code_entry(instance_data(ContractExecutable::StellarAsset)).is_err());
    }

    #[test]
    fn test_health_status_threshold() {
        assert_eq!(health_status(10), HealthStatus::Healthy);
        assert_eq!(health_status(DEGRADED_LATENCY_MS), HealthStatus::Healthy);
        assert_eq!(health_status(DEGRADED_LATENCY_MS + 1), HealthStatus::Degraded);
    }

    #[test]
    fn test_user_message_translates_known_errors() {
        let err = SorobanError::RpcError("HTTP 404 Not Found: ".to_string());
        assert!(err.user_message().starts_with("Resource not found"));
    }

    #[tokio::test]
    async fn test_unreachable_rpc_reports_offline() {
        let service = SorobanService::new(NetworkConfig::custom(
            "http://127.0.0.1:9/rpc".to_string(),
            "Unreachable".to_string(),
        ));

        let health = service.network_health().await;
        assert_eq!(health.status, HealthStatus::Offline);
        assert_eq!(health.latest_ledger, 0);
    }

    #[tokio::test]
    async fn test_unreachable_rpc_fails_storage_read() {
        let service = SorobanService::new(NetworkConfig::custom(
            "http://127.0.0.1:9/rpc".to_string(),
            "Unreachable".to_string(),
        ));
        let contract = ContractIdentifier::from_bytes([5u8; 32]);

        let result = service
            .read_contract_data(&contract, ScVal::U32(1), DurabilityClass::Temporary)
            .await;
        tokio_test::assert_err!(result);
    }

    #[tokio::test]
    async fn test_account_history_validates_address_before_fetching() {
        let service = SorobanService::new(NetworkConfig::custom(
            "http://127.0.0.1:9/rpc".to_string(),
            "Unreachable".to_string(),
        ));

        let err = service.fetch_account_history("not-an-account").await.unwrap_err();
        assert!(matches!(err, SorobanError::InvalidAccount(_)));

        let contract = ContractIdentifier::from_bytes([5u8; 32]).to_string();
        let err = service.fetch_account_history(&contract).await.unwrap_err();
        assert!(matches!(err, SorobanError::InvalidAccount(_)));

        let account = stellar_strkey::ed25519::PublicKey([7u8; 32]).to_string();
        let result = service.fetch_account_history(&account).await;
        assert!(matches!(result, Err(SorobanError::NetworkError(_))));
    }
}
