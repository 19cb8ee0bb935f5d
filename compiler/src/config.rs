//! Per-run configuration of the generated assignment.

/// The anchor used on both sides of the body when no directive overrides it.
pub const DEFAULT_ANCHOR: &str = "\\b";

/// The name the pattern is assigned to when no `#type` directive is given.
pub const DEFAULT_TYPE_NAME: &str = "regex";

/// The three strings that frame a compiled word list. Fixed for the whole
/// run once the input has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prefix: String,
    pub suffix: String,
    pub type_name: String,
}

impl Config {
    pub fn new<P, S, T>(prefix: P, suffix: S, type_name: T) -> Self
    where
        P: Into<String>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            type_name: type_name.into(),
        }
    }

    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_type_name<S: Into<String>>(mut self, type_name: S) -> Self {
        self.type_name = type_name.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_ANCHOR, DEFAULT_ANCHOR, DEFAULT_TYPE_NAME)
    }
}
