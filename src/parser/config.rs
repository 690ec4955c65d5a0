use serde::{Deserialize, Serialize};

/// Default limit on nested call expressions
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser limits
///
/// Missing fields fall back to their defaults when deserializing, so
/// `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum number of call expressions nested inside each other
    pub max_depth: usize,
}

impl ParserConfig {
    /// Creates a configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum call nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
