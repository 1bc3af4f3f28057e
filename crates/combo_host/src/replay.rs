//! Replays recorded action logs.
//!
//! A log is JSON lines of `{"type": "FILTER_INPUT", "payload": "ab"}`. A
//! missing payload means "no value"; `FILTER` takes a built-in filter name.
use std::io::{self, BufRead};

use combo_core::{Action, Entry, Filter, Signal, Value};
use combo_logging::{combo_debug, combo_info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{truthy, Combobox};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown action type: {0}")]
    UnknownAction(String),
    #[error("unknown filter: {0}")]
    UnknownFilter(String),
    #[error("{kind} expects {expected} payload, got {got}")]
    Payload {
        kind: String,
        expected: &'static str,
        got: Value,
    },
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ReplayError>,
    },
}

/// One recorded action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl TryFrom<ActionRecord> for Action {
    type Error = ReplayError;

    fn try_from(record: ActionRecord) -> Result<Self, Self::Error> {
        let ActionRecord { kind, payload } = record;
        let action = match kind.as_str() {
            "ITEMS" => match payload {
                Value::Null => Action::Items(Vec::new()),
                Value::Array(values) => Action::Items(values.into_iter().map(Entry::Raw).collect()),
                got => return Err(payload_error(kind, "array", got)),
            },
            "BLUR" => Action::Blur,
            "FOCUS" => Action::Focus,
            "CLICK" => Action::Click,
            "SELECT" => Action::Select(Entry::Raw(payload)),
            "SELECT_ACTIVE" | "SELECT-ACTIVE" => Action::SelectActive,
            "FILTER" => match payload {
                Value::String(name) => match Filter::builtin(&name) {
                    Some(filter) => Action::Filter(filter),
                    None => return Err(ReplayError::UnknownFilter(name)),
                },
                got => return Err(payload_error(kind, "filter name", got)),
            },
            "FILTER_INPUT" => Action::FilterInput(optional_text(&kind, payload)?),
            "UP" => Action::Up,
            "DOWN" => Action::Down,
            "FILTERING" => Action::Filtering(truthy(&payload)),
            "ENABLE" => Action::Enable,
            "DISABLE" => Action::Disable,
            "AUTO_ADD" => Action::AutoAdd(truthy(&payload)),
            "TEXT_FIELD" => Action::TextField(optional_text(&kind, payload)?),
            _ => return Err(ReplayError::UnknownAction(kind)),
        };
        Ok(action)
    }
}

fn optional_text(kind: &str, payload: Value) -> Result<Option<String>, ReplayError> {
    match payload {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        got => Err(payload_error(kind.to_owned(), "string", got)),
    }
}

fn payload_error(kind: String, expected: &'static str, got: Value) -> ReplayError {
    ReplayError::Payload {
        kind,
        expected,
        got,
    }
}

/// Parses one JSON record into an action.
pub fn parse_action(line: &str) -> Result<Action, ReplayError> {
    let record: ActionRecord = serde_json::from_str(line)?;
    Action::try_from(record)
}

/// Dispatches every record of `reader` into `combo`, collecting the signals.
///
/// Blank lines are skipped. Stops at the first bad record; actions before it
/// stay applied.
pub fn replay<R: BufRead>(combo: &mut Combobox, reader: R) -> Result<Vec<Signal>, ReplayError> {
    let mut signals = Vec::new();
    let mut count = 0usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let action = parse_action(&line).map_err(|err| ReplayError::AtLine {
            line: index + 1,
            source: Box::new(err),
        })?;
        combo_debug!("replay line {}: {}", index + 1, action.kind());
        signals.extend(combo.dispatch(action));
        count += 1;
    }
    combo_info!("Replayed {} actions, {} signals", count, signals.len());
    Ok(signals)
}
