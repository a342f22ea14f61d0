//! Configuration model and loading

pub mod loader;
pub mod model;
pub mod overrides;

pub use loader::load_config;
pub use model::{
    Bundler, Config, Formatter, LintCategory, LintConfig, Linter, TestFramework, UiFramework,
};
pub use overrides::ConfigOverrides;
