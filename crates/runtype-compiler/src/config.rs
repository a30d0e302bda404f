//! Transform configuration.

use runtype_core::{DEFAULT_DIRECTIVE, DEFAULT_LIBRARY, GlobalTypes};

use crate::Result;

/// Options shared by every unit of a build. Built once, borrowed immutably.
///
/// Deserializes from JSON; every field is optional and unknown fields are
/// ignored:
///
/// ```json
/// { "globals": [{ "ReactClass": true }], "library": "tcomb", "directive": "@tcomb" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Type names defined outside any unit. They compile to `Any`.
    pub globals: GlobalTypes,
    /// Module the runtime library is imported from.
    pub library: String,
    /// Comment marker that opts a unit in.
    pub directive: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            globals: GlobalTypes::new(),
            library: DEFAULT_LIBRARY.to_string(),
            directive: DEFAULT_DIRECTIVE.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn globals(mut self, globals: GlobalTypes) -> Self {
        self.globals = globals;
        self
    }

    pub fn library(mut self, library: impl Into<String>) -> Self {
        self.library = library.into();
        self
    }

    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = directive.into();
        self
    }
}
