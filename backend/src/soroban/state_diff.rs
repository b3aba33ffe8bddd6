use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Modified,
    Deleted,
}

/// One changed storage entry between two snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDiff {
    pub key: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    #[serde(rename = "type")]
    pub change: ChangeType,
}

/// Compare two storage snapshots (rendered key → rendered value).
///
/// Entries come out in key order; unchanged keys are omitted.
pub fn compute_state_diff(
    old_state: &BTreeMap<String, String>,
    new_state: &BTreeMap<String, String>,
) -> Vec<StateDiff> {
    let mut keys: Vec<&String> = old_state.keys().chain(new_state.keys()).collect();
    keys.sort();
    keys.dedup();

    keys.into_iter()
        .filter_map(|key| {
            let old_value = old_state.get(key);
            let new_value = new_state.get(key);
            let change = match (old_value, new_value) {
                (None, Some(_)) => ChangeType::Added,
                (Some(_), None) => ChangeType::Deleted,
                (Some(old), Some(new)) if old != new => ChangeType::Modified,
                _ => return None,
            };
            Some(StateDiff {
                key: key.clone(),
                old_value: old_value.cloned(),
                new_value: new_value.cloned(),
                change,
            })
        })
        .collect()
}
