//! Per-field overrides layered on top of a loaded or default `Config`

use super::model::{
    Bundler, Config, Formatter, LintCategory, LintConfig, Linter, TestFramework, UiFramework,
};

/// Values supplied on the command line.
///
/// `None` keeps whatever the config already has. For the optional axes,
/// `Some(None)` clears the selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub main_entry_point: Option<String>,
    pub sources: Option<Vec<String>>,
    pub tests: Option<Vec<String>>,
    pub typescript: Option<bool>,
    pub linter: Option<Option<Linter>>,
    pub formatter: Option<Option<Formatter>>,
    pub test_framework: Option<Option<TestFramework>>,
    pub ui_framework: Option<Option<UiFramework>>,
    pub bundler: Option<Option<Bundler>>,
    pub lint_categories: Option<Vec<LintCategory>>,
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply every present override to `config`
    pub fn apply(self, config: &mut Config) {
        set(&mut config.main_entry_point, self.main_entry_point);
        set(&mut config.sources, self.sources);
        set(&mut config.tests, self.tests);
        set(&mut config.typescript, self.typescript);
        set(&mut config.linter, self.linter);
        set(&mut config.formatter, self.formatter);
        set(&mut config.test_framework, self.test_framework);
        set(&mut config.ui_framework, self.ui_framework);
        set(&mut config.bundler, self.bundler);

        // An empty category list switches lint categories off
        if let Some(categories) = self.lint_categories {
            config.lint_config = if categories.is_empty() {
                None
            } else {
                Some(LintConfig::new(categories))
            };
        }
    }
}
