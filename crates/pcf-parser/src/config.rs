use serde::{Deserialize, Serialize};

/// Configuration for parser behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Reject lines whose command is neither `set_io` nor `set_clk`.
    ///
    /// The format's tooling traditionally drops such lines without comment,
    /// so the default is permissive; PCF files in the wild carry
    /// vendor-specific commands.
    pub strict: bool,

    /// Maximum file size to parse (in bytes)
    /// Enforced by `parse_file` only
    pub max_file_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_file_size: 1024 * 1024, // 1 MB
        }
    }
}

impl ParserConfig {
    /// Create config that rejects unrecognized commands
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }

    /// Set strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set maximum file size
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = size;
        self
    }
}
