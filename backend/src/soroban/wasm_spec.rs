//! Heuristic function-name extraction from contract WASM
//!
//! Soroban embeds the contract interface as XDR inside the `contractspecv0`
//! custom section. Rather than decoding that structure, the miner reads the
//! section as lossy UTF-8 text and keeps identifier-shaped tokens that look
//! like lower_snake_case function names.
//!
//! # Limitations
//!
//! - Any snake_case identifier inside the section (field names, type names,
//!   error variants in doc strings) is reported as a function.
//! - The reserved-word list and token pattern are tuning data and are exposed
//!   through [`SpecMinerConfig`].
//!
//! The miner never fails: problems are reported through placeholder entries.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wasmparser::{Parser, Payload};

/// Custom section holding the contract interface specification
pub const CONTRACT_SPEC_SECTION: &str = "contractspecv0";

/// Returned when the module cannot be parsed at all
pub const PARSE_FAILED_PLACEHOLDER: &str = "Parsing failed";

/// Returned when the module parses but yields no candidate names
pub const NO_FUNCTIONS_PLACEHOLDER: &str = "(No public functions found)";

/// Identifier tokens of 3 to 40 characters
pub const DEFAULT_TOKEN_PATTERN: &str = r"[A-Za-z_][A-Za-z0-9_]{2,39}";

/// Keywords of the spec language itself
pub const DEFAULT_RESERVED_WORDS: &[&str] = &[
    "contract", "spec", "entry", "function", "struct", "enum", "type", "symbol", "address",
    "string", "i32", "i64", "i128", "u32", "u64", "u128", "bool", "vec", "map",
];

const FUNCTION_NAME_PATTERN: &str = r"^[a-z][a-z0-9_]*$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecMinerConfig {
    pub section_name: String,
    pub token_pattern: String,
    pub reserved_words: Vec<String>,
}

impl Default for SpecMinerConfig {
    fn default() -> Self {
        Self {
            section_name: CONTRACT_SPEC_SECTION.to_string(),
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
            reserved_words: DEFAULT_RESERVED_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}

/// Stateless miner; holds its tuning data and the patterns compiled from it
#[derive(Debug, Clone)]
pub struct SpecMiner {
    config: SpecMinerConfig,
    token_re: Option<Regex>,
    function_re: Option<Regex>,
}

impl Default for SpecMiner {
    fn default() -> Self {
        Self::with_config(SpecMinerConfig::default())
    }
}

impl SpecMiner {
    pub fn new() -> Self {
        Self::default()
    }

    /// An invalid token pattern is logged once here; such a miner finds no names.
    pub fn with_config(config: SpecMinerConfig) -> Self {
        let token_re = compile_pattern(&config.token_pattern);
        let function_re = compile_pattern(FUNCTION_NAME_PATTERN);
        Self {
            config,
            token_re,
            function_re,
        }
    }

    pub fn config(&self) -> &SpecMinerConfig {
        &self.config
    }

    /// Probable function names in first-seen order, or a single placeholder.
    pub fn mine(&self, module_bytes: &[u8]) -> Vec<String> {
        let section = match find_custom_section(module_bytes, &self.config.section_name) {
            Ok(section) => section,
            Err(e) => {
                warn!(error = %e, "Failed to parse WASM module");
                return vec![PARSE_FAILED_PLACEHOLDER.to_string()];
            }
        };

        let names = match section {
            Some(data) if !data.is_empty() => self.extract_names(&String::from_utf8_lossy(data)),
            _ => {
                debug!(section = %self.config.section_name, "Spec section missing or empty");
                Vec::new()
            }
        };

        if names.is_empty() {
            vec![NO_FUNCTIONS_PLACEHOLDER.to_string()]
        } else {
            names
        }
    }

    fn extract_names(&self, text: &str) -> Vec<String> {
        let (Some(token_re), Some(function_re)) = (&self.token_re, &self.function_re) else {
            return Vec::new();
        };

        let mut names: Vec<String> = Vec::new();
        for token in token_re.find_iter(text).map(|m| m.as_str()) {
            if self.is_reserved(token) || !function_re.is_match(token) {
                continue;
            }
            if !names.iter().any(|n| n == token) {
                names.push(token.to_string());
            }
        }

        debug!(count = names.len(), "Mined function names from spec section");
        names
    }

    fn is_reserved(&self, token: &str) -> bool {
        self.config
            .reserved_words
            .iter()
            .any(|w| w.eq_ignore_ascii_case(token))
    }
}

fn compile_pattern(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|e| warn!(pattern = %pattern, error = %e, "Invalid spec token pattern"))
        .ok()
}

/// Mine with the default configuration.
pub fn mine_function_names(module_bytes: &[u8]) -> Vec<String> {
    SpecMiner::default().mine(module_bytes)
}

/// Bytes of the first custom section called `name`, if any.
pub fn find_custom_section<'a>(
    module_bytes: &'a [u8],
    name: &str,
) -> Result<Option<&'a [u8]>, wasmparser::BinaryReaderError> {
    let mut found = None;
    for payload in Parser::new(0).parse_all(module_bytes) {
        if let Payload::CustomSection(reader) = payload? {
            if found.is_none() && reader.name() == name {
                found = Some(reader.data());
            }
        }
    }
    Ok(found)
}

/// True when the names are a real result rather than a placeholder.
pub fn has_functions(names: &[String]) -> bool {
    !matches!(
        names,
        [only] if only == PARSE_FAILED_PLACEHOLDER || only == NO_FUNCTIONS_PLACEHOLDER
    )
}
