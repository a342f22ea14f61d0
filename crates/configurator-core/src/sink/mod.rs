//! Output sinks receiving generated files, dependencies and package fields
//!
//! This module provides:
//! - The `Sink` trait the engine writes through
//! - `PackageManifest`, the shared `package.json` accumulator and merge rule
//! - `MemorySink` for in-memory rendering and `FsSink` for writing to disk

pub mod fs;
pub mod memory;

use anyhow::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::future::Future;

pub use fs::FsSink;
pub use memory::MemorySink;

/// Contents of a generated file
#[derive(Debug, Clone, PartialEq)]
pub enum FileContents {
    /// Literal file text
    Text(String),
    /// Structured value serialized as pretty JSON when rendered
    Json(Value),
}

impl FileContents {
    /// Render to the text written on disk. Always ends with a newline.
    pub fn render(&self) -> Result<String> {
        let mut text = match self {
            FileContents::Text(text) => text.clone(),
            FileContents::Json(value) => serde_json::to_string_pretty(value)?,
        };
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Ok(text)
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            FileContents::Json(value) => Some(value),
            FileContents::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContents::Text(text) => Some(text),
            FileContents::Json(_) => None,
        }
    }
}

/// A file produced by a processor. Identified by its relative `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub name: String,
    pub contents: FileContents,
}

impl GeneratedFile {
    pub fn text(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: FileContents::Text(contents.into()),
        }
    }

    pub fn json(name: impl Into<String>, contents: Value) -> Self {
        Self {
            name: name.into(),
            contents: FileContents::Json(contents),
        }
    }
}

/// Destination for everything a generation run produces.
///
/// The engine calls these methods sequentially; by the time `finalise` runs,
/// every earlier call must have taken effect.
pub trait Sink {
    /// Record or persist a generated file
    fn emit_file(&mut self, file: GeneratedFile) -> impl Future<Output = Result<()>> + Send;

    /// Declare a runtime dependency
    fn add_dependency(&mut self, name: &str, version: &str);

    /// Declare a dev dependency
    fn add_dev_dependency(&mut self, name: &str, version: &str);

    /// Contribute a top-level `package.json` field (see [`merge_package_field`])
    fn emit_package_field(&mut self, name: &str, value: Value);

    /// Materialize the accumulated output, called once after all processors
    fn finalise(&mut self) -> impl Future<Output = Result<()>> + Send;
}

/// Merge `value` into `fields[name]`.
///
/// Two JSON objects are shallow-merged with the new keys winning; anything
/// else replaces the existing value.
pub fn merge_package_field(fields: &mut Map<String, Value>, name: &str, value: Value) {
    let Value::Object(incoming) = value else {
        fields.insert(name.to_string(), value);
        return;
    };

    if let Some(Value::Object(current)) = fields.get_mut(name) {
        current.extend(incoming);
        return;
    }

    fields.insert(name.to_string(), Value::Object(incoming));
}

/// Accumulated `package.json` state shared by the sinks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageManifest {
    pub fields: Map<String, Value>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Start from the skeleton every generated project gets
    pub fn new() -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::from("generated-project"));
        fields.insert("version".to_string(), Value::from("1.0.0"));
        fields.insert("type".to_string(), Value::from("module"));
        Self {
            fields,
            ..Default::default()
        }
    }

    pub fn add_dependency(&mut self, name: &str, version: &str) {
        self.dependencies
            .insert(name.to_string(), version.to_string());
    }

    pub fn add_dev_dependency(&mut self, name: &str, version: &str) {
        self.dev_dependencies
            .insert(name.to_string(), version.to_string());
    }

    pub fn emit_field(&mut self, name: &str, value: Value) {
        merge_package_field(&mut self.fields, name, value);
    }

    /// The final `package.json` object, with dependency maps appended
    pub fn to_json(&self) -> Value {
        let mut fields = self.fields.clone();
        fields.insert(
            "dependencies".to_string(),
            Value::Object(to_object(&self.dependencies)),
        );
        fields.insert(
            "devDependencies".to_string(),
            Value::Object(to_object(&self.dev_dependencies)),
        );
        Value::Object(fields)
    }
}

fn to_object(deps: &BTreeMap<String, String>) -> Map<String, Value> {
    deps.iter()
        .map(|(name, version)| (name.clone(), Value::from(version.as_str())))
        .collect()
}
