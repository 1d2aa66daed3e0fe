//! Messages exchanged between a caller and the execution context.
//!
//! Both directions travel as JSON text so nothing is shared between the
//! two sides by reference.

use crate::batch::chunker::split;
use crate::batch::prepare::prepare;
use crate::batch::types::{
    DedupeMode, DelimiterMode, Group, PreparationConfig, PreparationStats, SplitConfig, SplitMode,
    ValidationMode,
};
use crate::constants::UNKNOWN_SPLIT_ERROR;
use crate::error::{ConfigError, ExecutionError};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A preparation plus chunking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRequest {
    pub raw_input: String,
    #[serde(default)]
    pub delimiter: DelimiterMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedupe_mode: Option<DedupeMode>,
    /// Older boolean form of `dedupe_mode`; `true` means case-sensitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedupe: Option<bool>,
    #[serde(default)]
    pub validation_mode: ValidationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_validation_pattern: Option<String>,
    #[serde(default)]
    pub split_mode: SplitMode,
    pub split_value: Number,
}

impl SplitRequest {
    pub fn new(
        raw_input: impl Into<String>,
        preparation: &PreparationConfig,
        split: &SplitConfig,
    ) -> Self {
        Self {
            raw_input: raw_input.into(),
            delimiter: preparation.delimiter,
            dedupe_mode: Some(preparation.dedupe_mode),
            dedupe: None,
            validation_mode: preparation.validation_mode,
            custom_validation_pattern: preparation.custom_pattern.clone(),
            split_mode: split.mode,
            split_value: Number::from(split.value),
        }
    }

    pub fn preparation_config(&self) -> PreparationConfig {
        let dedupe_mode = match (self.dedupe_mode, self.dedupe) {
            (Some(mode), _) => mode,
            (None, Some(true)) => DedupeMode::CaseSensitive,
            (None, _) => DedupeMode::None,
        };
        PreparationConfig {
            delimiter: self.delimiter,
            dedupe_mode,
            validation_mode: self.validation_mode,
            custom_pattern: self.custom_validation_pattern.clone(),
        }
    }

    /// Fractional or out-of-range split values are rejected here.
    pub fn split_config(&self) -> Result<SplitConfig, ConfigError> {
        let value = match self.split_value.as_i64() {
            Some(v) => v,
            None => match self.split_value.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= 1.0 && f <= i64::MAX as f64 => f as i64,
                _ => return Err(ConfigError::InvalidSplitValue),
            },
        };
        Ok(SplitConfig::new(self.split_mode, value))
    }
}

/// Successful terminal outcome of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitOutcome {
    pub groups: Vec<Group>,
    pub stats: PreparationStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitFailure {
    pub error: String,
}

/// Exactly one of the two shapes; anything else is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SplitResponse {
    Success(SplitOutcome),
    Failure(SplitFailure),
}

impl SplitResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        SplitResponse::Failure(SplitFailure {
            error: message.into(),
        })
    }
}

/// Runs preparation then chunking for one request.
pub fn execute(request: &SplitRequest) -> Result<SplitOutcome, ConfigError> {
    let prepared = prepare(&request.raw_input, &request.preparation_config())?;
    let groups = split(&prepared.items, &request.split_config()?)?;
    Ok(SplitOutcome {
        groups,
        stats: prepared.stats,
    })
}

pub fn respond(request: &SplitRequest) -> SplitResponse {
    match execute(request) {
        Ok(outcome) => SplitResponse::Success(outcome),
        Err(e) => SplitResponse::failure(e.to_string()),
    }
}

pub fn encode_response(response: &SplitResponse) -> String {
    serde_json::to_string(response)
        .unwrap_or_else(|_| failure_message(UNKNOWN_SPLIT_ERROR))
}

pub fn failure_message(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Worker-side entry point: request JSON in, response JSON out. Never fails;
/// every problem becomes an `{error}` response.
pub fn handle_message(message: &str) -> String {
    let response = match serde_json::from_str::<SplitRequest>(message) {
        Ok(request) => respond(&request),
        Err(e) => SplitResponse::failure(format!("invalid request: {e}")),
    };
    encode_response(&response)
}

/// Caller-side decoding of a response message.
pub fn decode_response(message: &str) -> Result<SplitOutcome, ExecutionError> {
    match serde_json::from_str::<SplitResponse>(message) {
        Ok(SplitResponse::Success(outcome)) => Ok(outcome),
        Ok(SplitResponse::Failure(failure)) => Err(ExecutionError::Failed(failure.error)),
        Err(e) => Err(ExecutionError::MalformedResponse(e.to_string())),
    }
}
