use thiserror::Error;
use tracing::trace;

use crate::shared::config::env_file::unquote;
use crate::shared::config::settings::Slot;

const TRUTHY: [&str; 4] = ["true", "1", "yes", "on"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoercionError {
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("{key} expects a base-10 integer, keeping the previous value")]
    InvalidInteger { key: String },
}

pub fn parse_bool(raw: &str) -> bool {
    TRUTHY.iter().any(|truthy| raw.eq_ignore_ascii_case(truthy))
}

pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Accepts either `a, b, c` or a bracketed `["a", "b"]` form. Empty items are dropped.
pub fn parse_list(raw: &str) -> Vec<String> {
    if raw.len() >= 2 && raw.starts_with('[') && raw.ends_with(']') {
        raw[1..raw.len() - 1]
            .split(',')
            .map(|item| unquote(item.trim()))
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

pub fn coerce_into(slot: Slot<'_>, key: &str, raw: &str) -> Result<(), CoercionError> {
    match slot {
        Slot::Bool(value) => *value = parse_bool(raw),
        Slot::Int(value) => {
            *value = parse_int(raw).ok_or_else(|| CoercionError::InvalidInteger {
                key: key.to_string(),
            })?
        }
        Slot::List(value) => *value = parse_list(raw),
        Slot::Str(value) => *value = raw.to_string(),
    }
    trace!(key, "configuration value applied");
    Ok(())
}
