//! Filesystem sink, writes generated files into an output directory

use super::{GeneratedFile, PackageManifest, Sink};
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Writes each file as soon as it is emitted.
///
/// `finalise` writes `package.json` only when the output directory does not
/// already contain one.
#[derive(Debug)]
pub struct FsSink {
    out_dir: PathBuf,
    manifest: PackageManifest,
    written: Vec<PathBuf>,
    kept_existing_manifest: bool,
}

impl FsSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            manifest: PackageManifest::new(),
            written: Vec::new(),
            kept_existing_manifest: false,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Paths written so far, in write order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Whether `finalise` found a `package.json` and left it alone
    pub fn kept_existing_manifest(&self) -> bool {
        self.kept_existing_manifest
    }

    /// Dev dependencies declared during the run
    pub fn dev_dependencies(&self) -> &BTreeMap<String, String> {
        &self.manifest.dev_dependencies
    }

    async fn write(&mut self, name: &str, contents: String) -> Result<()> {
        let path = self.out_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&path, contents)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "wrote file");
        self.written.push(path);
        Ok(())
    }
}

impl Sink for FsSink {
    async fn emit_file(&mut self, file: GeneratedFile) -> Result<()> {
        let contents = file
            .contents
            .render()
            .with_context(|| format!("Failed to serialize {}", file.name))?;
        self.write(&file.name, contents).await
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
        let path = self.out_dir.join("package.json");
        let exists = fs::try_exists(&path)
            .await
            .with_context(|| format!("Failed to check for existing {}", path.display()))?;
        if exists {
            tracing::info!(path = %path.display(), "package.json already exists, leaving it untouched");
            self.kept_existing_manifest = true;
            return Ok(());
        }

        let contents = super::FileContents::Json(self.manifest.to_json())
            .render()
            .context("Failed to serialize package.json")?;
        self.write("package.json", contents).await
    }
}
