//! Error types for configuration validation and generation

use crate::catalog::LabeledOption;
use crate::config::{Bundler, UiFramework};
use std::fmt;
use thiserror::Error;

/// A configuration rejected before any processor ran
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("At least one source glob is required")]
    MissingSources,

    #[error("At least one test glob is required")]
    MissingTests,

    #[error("Glob patterns in \"{0}\" must not be blank")]
    BlankGlob(&'static str),

    #[error("Bundler \"{0}\" requires a main entry point to be specified")]
    MissingEntryPoint(Bundler),

    #[error("Bundler \"{0}\" requires TypeScript to be enabled")]
    RequiresTypeScript(Bundler),

    #[error("UI framework \"{ui_framework}\" is not compatible with bundler \"{bundler}\"")]
    IncompatibleBundler {
        ui_framework: UiFramework,
        bundler: Bundler,
    },

    #[error("UI framework \"{0}\" requires a bundler to be selected")]
    BundlerRequired(UiFramework),
}

/// Failure of a generation run
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration broke a validation rule; nothing was generated
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),

    /// A processor or the sink failed part way through the run
    #[error(transparent)]
    Sink(#[from] anyhow::Error),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn as_validation(&self) -> Option<&ConfigValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            Error::Sink(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// A textual value that is not in the catalog for its axis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind}: {value}. Valid options: {valid}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
    pub valid: String,
}

impl UnknownOption {
    pub fn new<T: fmt::Display>(kind: &'static str, value: &str, options: &[LabeledOption<T>]) -> Self {
        let valid = options
            .iter()
            .map(|opt| opt.value.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            kind,
            value: value.to_string(),
            valid,
        }
    }
}
