//! Reading the value tree and the target from outside the process.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::PathFindError;

/// Read `path` and parse it as a single JSON document.
#[instrument(target = "json_pathfind::document", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_document(path: impl AsRef<Path>) -> Result<Value, PathFindError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PathFindError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(target: "json_pathfind::document", bytes = text.len(), "document read");
    serde_json::from_str(&text).map_err(|source| PathFindError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Turn command-line text into a target value.
///
/// Without `literal` the text is taken verbatim as a string target. With it,
/// the text is parsed as JSON so `42`, `true`, `null` or `{"a":1}` can be
/// searched for.
pub fn parse_target(raw: &str, literal: bool) -> Result<Value, PathFindError> {
    if literal {
        serde_json::from_str(raw).map_err(PathFindError::Target)
    } else {
        Ok(Value::String(raw.to_string()))
    }
}
