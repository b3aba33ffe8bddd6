use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of transactions returned by an account history query
pub const HISTORY_LIMIT: u32 = 50;

/// Column headers of the history CSV export
pub const HISTORY_CSV_HEADERS: [&str; 5] = [
    "Timestamp",
    "Transaction Hash",
    "Type",
    "Fee (Stroops)",
    "Status",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationSummary {
    #[serde(rename = "Multi-Op")]
    MultiOp,
    #[serde(rename = "Contract/Payment")]
    Single,
}

impl OperationSummary {
    pub fn from_count(operation_count: u32) -> Self {
        if operation_count > 1 {
            OperationSummary::MultiOp
        } else {
            OperationSummary::Single
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationSummary::MultiOp => "Multi-Op",
            OperationSummary::Single => "Contract/Payment",
        }
    }
}

impl fmt::Display for OperationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Success,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Success => f.write_str("Success"),
            TransactionStatus::Failed => f.write_str("Failed"),
        }
    }
}

/// One row of an account's transaction history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Close time as reported by Horizon (RFC 3339)
    pub timestamp: String,
    pub hash: String,
    pub op_type: OperationSummary,
    pub fee_paid: u64,
    pub result: TransactionStatus,
}

/// Transaction record as served by Horizon's `/accounts/{id}/transactions`
#[derive(Debug, Deserialize)]
pub struct HorizonTransaction {
    pub created_at: String,
    pub hash: String,
    pub operation_count: u32,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub fee_charged: u64,
    pub successful: bool,
}

impl From<HorizonTransaction> for HistoryRecord {
    fn from(tx: HorizonTransaction) -> Self {
        Self {
            timestamp: tx.created_at,
            hash: tx.hash,
            op_type: OperationSummary::from_count(tx.operation_count),
            fee_paid: tx.fee_charged,
            result: if tx.successful {
                TransactionStatus::Success
            } else {
                TransactionStatus::Failed
            },
        }
    }
}

// Horizon renders fees as strings
fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Fee {
        Number(u64),
        Text(String),
    }

    match Fee::deserialize(deserializer)? {
        Fee::Number(n) => Ok(n),
        Fee::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Render history rows as CSV with a header line.
pub fn history_to_csv(records: &[HistoryRecord]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HISTORY_CSV_HEADERS)?;

    for record in records {
        writer.write_record([
            record.timestamp.clone(),
            record.hash.clone(),
            record.op_type.to_string(),
            record.fee_paid.to_string(),
            record.result.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
