//! Human-readable explanations for Soroban RPC and host errors

const KNOWN_ERRORS: &[(&str, &str)] = &[
    (
        "VerificationFailed",
        "Contract verification failed. Ensure the WASM file matches the expected interface.",
    ),
    (
        "ExceededAllowance",
        "The operation exceeded the provided token allowance. Try increasing the limit.",
    ),
    (
        "InvalidAction",
        "Invalid Action: The contract logic rejected this call (e.g., failed assertion).",
    ),
    (
        "ResourceLimitExceeded",
        "Resource Limit Exceeded: This transaction requires more CPU or Memory than the network allows.",
    ),
    (
        "404",
        "Resource not found: The contract ID or Account does not exist on this network.",
    ),
];

/// Translate raw RPC error text; unknown errors are returned unchanged.
pub fn describe_rpc_error(message: &str) -> String {
    KNOWN_ERRORS
        .iter()
        .find(|(needle, _)| message.contains(needle))
        .map(|(_, explanation)| explanation.to_string())
        .unwrap_or_else(|| message.to_string())
}
