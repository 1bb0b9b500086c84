//! Arithmetic and random number tools.
use rand::Rng;
use rmcp::model::ErrorData;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::lib::errors::{RandomRangeError, INVALID_RANGE_ERROR};

pub const ADD_TOOL_ID: &str = "add";
pub const RANDOM_NUMBER_TOOL_ID: &str = "random_number";

pub const DEFAULT_MIN_VAL: i64 = 1;
pub const DEFAULT_MAX_VAL: i64 = 100;

/// Input for `add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddRequest {
    /// First addend.
    pub a: f64,
    /// Second addend.
    pub b: f64,
}

/// Output for `add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AddResponse {
    pub result: f64,
}

/// Input for `random_number`. Both bounds are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RandomNumberRequest {
    /// Lower bound (inclusive).
    #[serde(default = "default_min_val")]
    pub min_val: i64,
    /// Upper bound (inclusive).
    #[serde(default = "default_max_val")]
    pub max_val: i64,
}

impl Default for RandomNumberRequest {
    fn default() -> Self {
        Self {
            min_val: DEFAULT_MIN_VAL,
            max_val: DEFAULT_MAX_VAL,
        }
    }
}

fn default_min_val() -> i64 {
    DEFAULT_MIN_VAL
}

fn default_max_val() -> i64 {
    DEFAULT_MAX_VAL
}

/// Output for `random_number`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RandomNumberResponse {
    pub result: i64,
}

pub fn add(request: &AddRequest) -> AddResponse {
    AddResponse {
        result: request.a + request.b,
    }
}

/// Draw from `[min_val, max_val]` using the thread-local generator.
pub fn random_number(
    request: &RandomNumberRequest,
) -> Result<RandomNumberResponse, RandomRangeError> {
    random_number_with(&mut rand::rng(), request)
}

/// Draw from `[min_val, max_val]` using the supplied generator.
pub fn random_number_with<R: Rng + ?Sized>(
    rng: &mut R,
    request: &RandomNumberRequest,
) -> Result<RandomNumberResponse, RandomRangeError> {
    let RandomNumberRequest { min_val, max_val } = *request;
    if min_val > max_val {
        return Err(RandomRangeError { min_val, max_val });
    }
    Ok(RandomNumberResponse {
        result: rng.random_range(min_val..=max_val),
    })
}

/// Convert an inverted range into `ErrorData`.
pub fn range_error_to_error_data(err: RandomRangeError) -> ErrorData {
    let reason = err.to_string();
    INVALID_RANGE_ERROR
        .builder()
        .retryable(false)
        .details(json!({
            "min_val": err.min_val,
            "max_val": err.max_val,
            "reason": reason,
        }))
        .with_context_field("tool", json!(RANDOM_NUMBER_TOOL_ID))
        .build()
        .unwrap_or_else(|builder_err| ErrorData::invalid_params(builder_err.to_string(), None))
}
