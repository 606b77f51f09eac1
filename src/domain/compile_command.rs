//! Compilation database types
//!
//! A `compile_commands.json` is an array of objects, one per translation
//! unit. Only `file` is interpreted; every other field is carried through
//! as-is, in its original key order.

use crate::error::DatabaseError;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// One entry of a compilation database
#[derive(Debug, Clone, PartialEq)]
pub struct CompileCommand {
    fields: Map<String, Value>,
}

impl CompileCommand {
    /// Field holding the translation unit's source path
    pub const FILE_KEY: &'static str = "file";

    /// Validate a JSON value as a database entry at position `index`
    pub fn from_value(index: usize, value: Value) -> Result<Self, DatabaseError> {
        let Value::Object(fields) = value else {
            return Err(DatabaseError::NotAnObject { index });
        };

        match fields.get(Self::FILE_KEY) {
            Some(Value::String(_)) => Ok(Self { fields }),
            _ => Err(DatabaseError::MissingFile { index }),
        }
    }

    /// Source path of this entry
    pub fn file(&self) -> &str {
        self.fields
            .get(Self::FILE_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Working directory of the compiler invocation, when present
    pub fn directory(&self) -> Option<&str> {
        self.fields.get("directory").and_then(Value::as_str)
    }

    /// All fields, including `file`
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Serialize for CompileCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// Ordered list of compile commands
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CompilationDatabase {
    entries: Vec<CompileCommand>,
}

impl CompilationDatabase {
    pub fn new(entries: Vec<CompileCommand>) -> Self {
        Self { entries }
    }

    /// Parse database contents
    pub fn from_json(content: &str) -> Result<Self, DatabaseError> {
        let value: Value = serde_json::from_str(content)?;

        let items = match value {
            Value::Array(items) => items,
            other => return Err(DatabaseError::NotAnArray(json_kind(&other))),
        };

        let entries = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| CompileCommand::from_value(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Render with two-space indentation and no trailing newline
    pub fn to_json_pretty(&self) -> Result<String, DatabaseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn entries(&self) -> &[CompileCommand] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CompileCommand> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
