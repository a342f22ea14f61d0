//! Configurator Core - Generates JavaScript/TypeScript tooling configuration
//!
//! Given a description of a project (linter, formatter, test framework, UI
//! framework, bundler, TypeScript on or off), this library produces the
//! config files, dev dependencies and `package.json` fields that wire those
//! tools together.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Model** - `Config`, the option `catalog` and YAML loading
//! - **Layer 2: Generation** - `processors`, one per tool, driven by `engine::execute`
//!   and writing through a `Sink` (in memory or to disk)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based output (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based `tui` module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use configurator_core::{execute, Config, Linter, MemorySink};
//!
//! let mut config = Config::default();
//! config.linter = Some(Linter::Oxlint);
//!
//! let mut sink = MemorySink::new();
//! execute(&config, &mut sink).await?;
//! for file in sink.files() {
//!     println!("{}", file.name);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod processors;
pub mod sink;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{
    LabeledOption, BUNDLERS, FORMATTERS, LINTERS, LINT_CATEGORIES, TEST_FRAMEWORKS, UI_FRAMEWORKS,
};
pub use config::{
    load_config, Bundler, Config, ConfigOverrides, Formatter, LintCategory, LintConfig, Linter,
    TestFramework, UiFramework,
};
pub use engine::{execute, validate};
pub use error::{ConfigValidationError, Error, UnknownOption};
pub use sink::{FileContents, FsSink, GeneratedFile, MemorySink, Sink};

#[cfg(feature = "tui")]
pub use tui::run;
