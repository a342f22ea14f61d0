//! In-memory sink, used when output is displayed rather than written

use super::{FileContents, GeneratedFile, PackageManifest, Sink};
use anyhow::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Collects everything in memory.
///
/// `finalise` always (re)generates `package.json` as a regular file entry.
#[derive(Debug, Clone)]
pub struct MemorySink {
    files: Vec<GeneratedFile>,
    manifest: PackageManifest,
    finalised: bool,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            manifest: PackageManifest::new(),
            finalised: false,
        }
    }

    /// Files in the order they were first emitted
    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    pub fn file(&self, name: &str) -> Option<&FileContents> {
        self.files
            .iter()
            .find(|file| file.name == name)
            .map(|file| &file.contents)
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.name.as_str()).collect()
    }

    pub fn dependencies(&self) -> &BTreeMap<String, String> {
        &self.manifest.dependencies
    }

    pub fn dev_dependencies(&self) -> &BTreeMap<String, String> {
        &self.manifest.dev_dependencies
    }

    /// Package fields as merged so far, including the skeleton fields
    pub fn package_fields(&self) -> &Map<String, Value> {
        &self.manifest.fields
    }

    pub fn is_finalised(&self) -> bool {
        self.finalised
    }

    /// Nothing was emitted, declared or finalised
    pub fn is_untouched(&self) -> bool {
        self.files.is_empty()
            && self.manifest == PackageManifest::new()
            && !self.finalised
    }

    fn upsert(&mut self, file: GeneratedFile) {
        match self.files.iter_mut().find(|f| f.name == file.name) {
            Some(existing) => *existing = file,
            None => self.files.push(file),
        }
    }
}

impl Sink for MemorySink {
    async fn emit_file(&mut self, file: GeneratedFile) -> Result<()> {
        tracing::debug!(file = %file.name, "buffered file");
        self.upsert(file);
        Ok(())
    }

    fn add_dependency(&mut self, name: &str, version: &str) {
        self.manifest.add_dependency(name, version);
    }

    fn add_dev_dependency(&mut self, name: &str, version: &str) {
        self.manifest.add_dev_dependency(name, version);
    }

    fn emit_package_field(&mut self, name: &str, value: Value) {
        self.manifest.emit_field(name, value);
    }

    async fn finalise(&mut self) -> Result<()> {
        let package_json = self.manifest.to_json();
        self.upsert(GeneratedFile::json("package.json", package_json));
        self.finalised = true;
        Ok(())
    }
}
